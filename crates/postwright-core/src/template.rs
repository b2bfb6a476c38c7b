//! Abstraction that turns a prompt value into chat messages.
//!
//! Prompt values (the event post and event image templates in
//! `postwright-types`) implement [`IntoPrompt`]; provider back-ends receive
//! the resulting messages inside
//! [`TextGenerationParameters`](crate::provider::TextGenerationParameters).
//!
//! ```rust
//! use postwright_core::template::IntoPrompt;
//! use postwright_core::generic::{GenericMessage, GenericRole};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(HelloPrompt.into_prompt().len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// By making the `Message` type an **associated type** we keep the trait
/// flexible without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is already a prompt.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
