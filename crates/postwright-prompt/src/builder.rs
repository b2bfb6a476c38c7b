//! Builder‐style helper for constructing **plain-text prompts**.
//!
//! Writing multi-line prompt strings inline is tedious and makes optional
//! sections awkward. `PromptBuilder` offers a fluent API that lets you focus
//! on the *content* instead of the layout. Every method returns `self`,
//! enabling call-chaining:
//!
//! ```rust
//! use postwright_prompt::builder::PromptBuilder;
//!
//! let prompt = PromptBuilder::new()
//!     .add_line("Create a Twitter post about the following event:")
//!     .add_blank_line()
//!     .add_field("Event Name", "Tech Meetup")
//!     .add_blank_line()
//!     .add_line("Requirements:")
//!     .add_bullet("Maximum 280 characters")
//!     .finalize();
//!
//! assert!(prompt.contains("Event Name: Tech Meetup\n"));
//! assert!(prompt.ends_with("- Maximum 280 characters\n"));
//! ```
//!
//! The builder performs **no validation** and no smart formatting, so output
//! is predictable: newlines and whitespace are emitted exactly as requested.
//! Identical call chains always produce identical strings.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add a plain `Key: Value` line.
    pub fn add_field(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{key}: {value}");
        self
    }

    /// Add a `Key: Value` line only when `value` is present.
    pub fn add_optional_field<V: Display>(self, key: impl Display, value: Option<V>) -> Self {
        match value {
            Some(value) => self.add_field(key, value),
            None => self,
        }
    }

    /// Add a `- item` bullet line.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        let _ = writeln!(self.buffer, "- {item}");
        self
    }

    /// Add a bullet only when `condition` holds.
    pub fn add_bullet_if(self, condition: bool, item: impl Display) -> Self {
        if condition { self.add_bullet(item) } else { self }
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
