//! Form input describing the event that posts are generated for.
use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PostwrightError;

/// Details of one event, exactly as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl EventInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date,
            time,
            venue: venue.into(),
            registration_link: None,
            contact: None,
        }
    }

    pub fn with_registration_link(mut self, link: impl Into<String>) -> Self {
        self.registration_link = Some(link.into());
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Optional fields with blank values count as absent.
    pub fn registration_link(&self) -> Option<&str> {
        non_blank(self.registration_link.as_deref())
    }

    pub fn contact(&self) -> Option<&str> {
        non_blank(self.contact.as_deref())
    }

    /// Check the required text fields.
    ///
    /// # Errors
    ///
    /// The first blank field among name, description and venue, in that
    /// order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("event name"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("event description"));
        }
        if self.venue.trim().is_empty() {
            return Err(ValidationError::MissingField("venue"));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Input problems detected before any provider is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {0}.")]
    MissingField(&'static str),

    #[error("Please enter your API key.")]
    MissingApiKey,
}

/// Voice the posts should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Sarcastic,
    Humorous,
    Inspirational,
    Urgent,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Sarcastic,
        Tone::Humorous,
        Tone::Inspirational,
        Tone::Urgent,
        Tone::Friendly,
    ];

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Sarcastic => "Sarcastic",
            Tone::Humorous => "Humorous",
            Tone::Inspirational => "Inspirational",
            Tone::Urgent => "Urgent",
            Tone::Friendly => "Friendly",
        }
    }

    /// Lowercase form injected into prompts.
    pub fn prompt_word(&self) -> String {
        self.label().to_lowercase()
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = PostwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PostwrightError::Invalid(format!("unknown tone `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meetup() -> EventInput {
        EventInput::new(
            "Tech Meetup",
            "Monthly gathering",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            "Hall A",
        )
    }

    #[test]
    fn complete_event_validates() {
        assert_eq!(meetup().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_rejected_in_order() {
        let mut event = meetup();
        event.name = "   ".into();
        event.description = String::new();
        assert_eq!(
            event.validate(),
            Err(ValidationError::MissingField("event name"))
        );

        let mut event = meetup();
        event.description = String::new();
        assert_eq!(
            event.validate(),
            Err(ValidationError::MissingField("event description"))
        );

        let mut event = meetup();
        event.venue = "\t".into();
        assert_eq!(event.validate(), Err(ValidationError::MissingField("venue")));
    }

    #[test]
    fn blank_optional_fields_count_as_absent() {
        let event = meetup().with_registration_link("  ").with_contact("hi@example.com");
        assert_eq!(event.registration_link(), None);
        assert_eq!(event.contact(), Some("hi@example.com"));
    }

    #[test]
    fn tone_parses_labels_and_lowercases_for_prompts() {
        assert_eq!("casual".parse::<Tone>().unwrap(), Tone::Casual);
        assert_eq!("INSPIRATIONAL".parse::<Tone>().unwrap(), Tone::Inspirational);
        assert!("grumpy".parse::<Tone>().is_err());
        assert_eq!(Tone::Casual.prompt_word(), "casual");
        assert_eq!(Tone::Casual.to_string(), "Casual");
    }
}
