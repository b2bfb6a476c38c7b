mod result;

pub use result::GenerationResult;
