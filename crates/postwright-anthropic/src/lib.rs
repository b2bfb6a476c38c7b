//! Anthropic backend: the Messages API for post text. Claude has no image
//! endpoint, so only the text capability is implemented.

mod adapter;
mod model_map;
mod provider_impl_text;

pub use adapter::{AnthropicAdapter, AnthropicAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::AnthropicClient;
