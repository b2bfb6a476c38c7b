//! OpenAI backend: chat completions for post text, `dall-e-3` for the
//! optional promotional image.

mod adapter;
mod model_map;
mod provider_impl_image;
mod provider_impl_text;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
