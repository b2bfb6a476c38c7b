mod event_image;
mod event_post;

pub use event_image::EventImagePrompt;
pub use event_post::EventPostPrompt;
