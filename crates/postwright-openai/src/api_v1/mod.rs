mod chat_completion;
mod common;
mod images;

pub use chat_completion::*;
pub use common::{ApiErrorEnvelope, Usage};
pub use images::*;
