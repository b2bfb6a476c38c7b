//! Google Gemini backend: `generateContent` for post text.

mod adapter;
mod model_map;
mod provider_impl_text;

pub use adapter::{GeminiAdapter, GeminiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::GeminiClient;
