//! Prompt asking an image model for a promotional event graphic.
//!
//! The style instructions and exclusions are fixed: no human faces, no
//! copyrighted characters or logos, no written text. Image models render
//! lettering poorly and the posts already carry the event details.

use postwright_core::{event::EventInput, generic::GenericMessage, template::IntoPrompt};
use postwright_prompt::PromptBuilder;

#[derive(Debug, Clone, Copy)]
pub struct EventImagePrompt<'a> {
    name: &'a str,
    description: &'a str,
    venue: &'a str,
}

impl<'a> EventImagePrompt<'a> {
    pub fn new(name: &'a str, description: &'a str, venue: &'a str) -> Self {
        Self {
            name,
            description,
            venue,
        }
    }

    pub fn for_event(event: &'a EventInput) -> Self {
        Self::new(&event.name, &event.description, &event.venue)
    }

    pub fn render(&self) -> String {
        PromptBuilder::new()
            .add_line(format!(
                "Create an eye-catching promotional image for an event called \"{}\".",
                self.name
            ))
            .add_field("Event details", self.description)
            .add_field("Setting", self.venue)
            .add_blank_line()
            .add_line(
                "Style: modern social media graphic, vibrant colors, clean composition, \
                 suitable as a square post image.",
            )
            .add_blank_line()
            .add_line("Do not include:")
            .add_bullet("human faces")
            .add_bullet("copyrighted characters, brands or logos")
            .add_bullet("any written text, letters or numbers")
            .finalize()
    }
}

impl IntoPrompt for EventImagePrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self.render())]
    }
}
