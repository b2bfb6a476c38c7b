//! Capability traits implemented by every provider crate.

mod image_generation;
mod text_generation;

use std::{future::Future, pin::Pin};

pub use image_generation::*;
pub use text_generation::*;

/// Boxed, sendable future returned by the provider traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
