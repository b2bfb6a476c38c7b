//! Provider-agnostic building blocks of the **postwright** workspace:
//! errors, provider identity, capability traits, the platform catalog and
//! the event form input.
//!
//! Provider crates (`postwright-openai`, `postwright-anthropic`,
//! `postwright-gemini`) depend on this crate only; the umbrella crate wires
//! them together.

pub mod credential;
pub mod error;
pub mod event;
pub mod generic;
pub mod model;
pub mod outcome;
pub mod platform;
pub mod provider;
pub mod template;

pub use credential::ApiKey;
pub use error::{PostwrightError, Result};
pub use event::{EventInput, Tone, ValidationError};
pub use model::ProviderId;
pub use outcome::{FailureKind, Outcome, ProviderFailure};
pub use platform::{LengthStatus, PlatformCatalog, PlatformSpec};
