//! Prompt asking a text model for one platform-specific event post.
//!
//! # What it renders
//!
//! ```text
//! Create a Twitter post about the following event:
//!
//! Event Name: Tech Meetup
//! Event Description: Monthly gathering
//! Date: Saturday, June 1, 2024
//! Time: 18:00
//! Venue: Hall A
//! Tone: casual
//!
//! Requirements:
//! - Maximum 280 characters
//! - Style: concise and engaging tweet
//! - Include relevant hashtags and mentions if appropriate
//! - Tone should be casual
//!
//! Generate only the post content, no additional explanation.
//! ```
//!
//! Registration link and contact lines are inserted only when the event has
//! them. Rendering is a pure function of its inputs.

use chrono::{NaiveDate, NaiveTime};
use postwright_core::{
    error::Result,
    event::{EventInput, Tone},
    generic::GenericMessage,
    platform::{PlatformCatalog, PlatformSpec},
    template::IntoPrompt,
};
use postwright_prompt::PromptBuilder;

pub(crate) const DATE_FORMAT: &str = "%A, %B %-d, %Y";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

/// Borrowed view of everything a post prompt needs.
#[derive(Debug, Clone, Copy)]
pub struct EventPostPrompt<'a> {
    name: &'a str,
    description: &'a str,
    date: NaiveDate,
    time: NaiveTime,
    venue: &'a str,
    registration_link: Option<&'a str>,
    contact: Option<&'a str>,
    tone: Tone,
    platform: &'a PlatformSpec,
}

impl<'a> EventPostPrompt<'a> {
    /// Prompt for `event` targeting the catalog entry named `platform`.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::UnknownPlatform`](postwright_core::PostwrightError::UnknownPlatform)
    ///   if the catalog has no such entry.
    pub fn new(
        catalog: &'a PlatformCatalog,
        event: &'a EventInput,
        tone: Tone,
        platform: &str,
    ) -> Result<Self> {
        Ok(Self::for_spec(catalog.get(platform)?, event, tone))
    }

    /// Prompt for an already resolved platform entry.
    pub fn for_spec(platform: &'a PlatformSpec, event: &'a EventInput, tone: Tone) -> Self {
        Self {
            name: &event.name,
            description: &event.description,
            date: event.date,
            time: event.time,
            venue: &event.venue,
            registration_link: event.registration_link(),
            contact: event.contact(),
            tone,
            platform,
        }
    }

    /// Prompt from loose fields, without optional registration/contact data.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        catalog: &'a PlatformCatalog,
        name: &'a str,
        description: &'a str,
        tone: Tone,
        platform: &str,
        date: NaiveDate,
        time: NaiveTime,
        venue: &'a str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            description,
            date,
            time,
            venue,
            registration_link: None,
            contact: None,
            tone,
            platform: catalog.get(platform)?,
        })
    }

    pub fn platform(&self) -> &'a PlatformSpec {
        self.platform
    }

    pub fn render(&self) -> String {
        let tone = self.tone.prompt_word();

        PromptBuilder::new()
            .add_line(format!(
                "Create a {} post about the following event:",
                self.platform.name
            ))
            .add_blank_line()
            .add_field("Event Name", self.name)
            .add_field("Event Description", self.description)
            .add_field("Date", self.date.format(DATE_FORMAT))
            .add_field("Time", self.time.format(TIME_FORMAT))
            .add_field("Venue", self.venue)
            .add_optional_field("Registration Link", self.registration_link)
            .add_optional_field("Contact", self.contact)
            .add_field("Tone", &tone)
            .add_blank_line()
            .add_line("Requirements:")
            .add_bullet(format!("Maximum {} characters", self.platform.limit))
            .add_bullet(format!("Style: {}", self.platform.style))
            .add_bullet(&self.platform.features)
            .add_bullet(format!("Tone should be {tone}"))
            .add_bullet_if(
                self.registration_link.is_some(),
                "Include the registration link",
            )
            .add_blank_line()
            .add_line("Generate only the post content, no additional explanation.")
            .finalize()
    }
}

impl IntoPrompt for EventPostPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self.render())]
    }
}
