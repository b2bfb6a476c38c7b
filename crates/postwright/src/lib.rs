//! # `postwright` – event posts for LinkedIn, Twitter and WhatsApp
//!
//! This crate glues the building-block crates of the workspace together and
//! adds the pieces that only make sense once all providers are known:
//!
//! | Crate                      | What it provides                                                          |
//! |----------------------------|---------------------------------------------------------------------------|
//! | **`postwright-core`**      | Errors, provider ids, capability traits, platform catalog, event input    |
//! | **`postwright-prompt`**    | `PromptBuilder` for line-oriented prompt text                             |
//! | **`postwright-types`**     | Post and image prompt templates, `GenerationResult`                       |
//! | **`postwright-openai`**    | OpenAI chat completions + image generation                                |
//! | **`postwright-anthropic`** | Anthropic messages                                                        |
//! | **`postwright-gemini`**    | Google Gemini `generateContent`                                           |
//!
//! On top of those this crate provides
//!
//! * [`ProviderRegistry`] – which backend serves which [`ProviderId`],
//! * [`ProviderAdapter`] – timeouts and error folding, so every call yields an
//!   [`Outcome`],
//! * [`EventPostGenerator`] – the submission pipeline,
//! * [`GeneratorConfig`] – TOML configuration.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use chrono::{NaiveDate, NaiveTime};
//! use postwright::{
//!     ApiKey, EventInput, EventPostGenerator, GeneratorConfig, ProviderId, Submission, Tone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let generator = EventPostGenerator::from_config(&GeneratorConfig::default())?;
//!     let event = EventInput::new(
//!         "Tech Meetup",
//!         "Monthly gathering of local developers",
//!         NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!         NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
//!         "Hall A",
//!     );
//!     let submission = Submission::new(event, ProviderId::Claude, ApiKey::new("sk-ant-..."))
//!         .with_tone(Tone::Casual);
//!
//!     let report = generator.generate(&submission).await?;
//!     for post in &report.results {
//!         println!("{}: {}", post.platform, post.display_text());
//!     }
//!     Ok(())
//! }
//! ```

pub use postwright_core::*;
pub use postwright_prompt as prompt;
pub use postwright_types as types;

pub use postwright_anthropic as anthropic;
pub use postwright_gemini as gemini;
pub use postwright_openai as openai;

pub mod adapter;
pub mod config;
pub mod generator;
pub mod registry;

pub use adapter::ProviderAdapter;
pub use config::{ConfigError, EndpointConfig, GeneratorConfig};
pub use generator::{EventPostGenerator, ReportView, Submission, SubmissionReport};
pub use registry::ProviderRegistry;
pub use types::GenerationResult;
