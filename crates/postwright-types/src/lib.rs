//! Prompt templates and result types for event posts.
//!
//! The two free functions are the string-level entry points; the
//! [`fragments`] types expose the same templates as [`IntoPrompt`] values.
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use postwright_core::{PlatformCatalog, Tone};
//! use postwright_types::build_text_prompt;
//!
//! let prompt = build_text_prompt(
//!     &PlatformCatalog::default(),
//!     "Tech Meetup",
//!     "Monthly gathering",
//!     Tone::Casual,
//!     "Twitter",
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
//!     "Hall A",
//! )
//! .unwrap();
//! assert!(prompt.contains("Maximum 280 characters"));
//! ```
//!
//! [`IntoPrompt`]: postwright_core::template::IntoPrompt

use chrono::{NaiveDate, NaiveTime};
use postwright_core::{PlatformCatalog, Result, Tone};

pub mod fragments;
pub mod outputs;

pub use fragments::{EventImagePrompt, EventPostPrompt};
pub use outputs::GenerationResult;

/// Render the post prompt for `platform`.
///
/// # Errors
///
/// * [`PostwrightError::UnknownPlatform`](postwright_core::PostwrightError::UnknownPlatform)
///   when `platform` is not in `catalog`.
#[allow(clippy::too_many_arguments)]
pub fn build_text_prompt(
    catalog: &PlatformCatalog,
    event_name: &str,
    description: &str,
    tone: Tone,
    platform: &str,
    date: NaiveDate,
    time: NaiveTime,
    venue: &str,
) -> Result<String> {
    EventPostPrompt::from_fields(
        catalog,
        event_name,
        description,
        tone,
        platform,
        date,
        time,
        venue,
    )
    .map(|prompt| prompt.render())
}

/// Render the promotional image prompt.
pub fn build_image_prompt(event_name: &str, description: &str, venue: &str) -> String {
    EventImagePrompt::new(event_name, description, venue).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_core::{PlatformSpec, PostwrightError};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn time() -> NaiveTime {
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    }

    fn build(catalog: &PlatformCatalog, platform: &str) -> Result<String> {
        build_text_prompt(
            catalog,
            "Tech Meetup",
            "Monthly gathering",
            Tone::Casual,
            platform,
            date(),
            time(),
            "Hall A",
        )
    }

    #[test]
    fn text_prompt_is_deterministic_for_every_platform() {
        let catalog = PlatformCatalog::default();
        for name in catalog.names() {
            assert_eq!(build(&catalog, name).unwrap(), build(&catalog, name).unwrap());
        }
    }

    #[test]
    fn text_prompt_carries_platform_constraints() {
        let catalog = PlatformCatalog::default();
        for spec in &catalog {
            let prompt = build(&catalog, &spec.name).unwrap();
            assert!(prompt.contains(&format!("Create a {} post", spec.name)));
            assert!(prompt.contains(&format!("Maximum {} characters", spec.limit)));
            assert!(prompt.contains(&spec.style));
            assert!(prompt.contains(&spec.features));
            assert!(prompt.contains("Tech Meetup"));
            assert!(prompt.contains("Hall A"));
            assert!(prompt.contains("casual"));
        }
    }

    #[test]
    fn text_prompt_rejects_names_outside_catalog() {
        let catalog = PlatformCatalog::default();
        for name in ["Facebook", "linkedin", "", "Twitter "] {
            let err = build(&catalog, name).unwrap_err();
            assert!(matches!(err, PostwrightError::UnknownPlatform { .. }), "{name:?}");
        }
    }

    #[test]
    fn configured_platforms_are_accepted() {
        let catalog = PlatformCatalog::new(vec![PlatformSpec::new(
            "Bluesky",
            300,
            "short post",
            "No hashtags",
        )])
        .unwrap();
        let prompt = build(&catalog, "Bluesky").unwrap();
        assert!(prompt.contains("Maximum 300 characters"));
        assert!(build(&catalog, "Twitter").is_err());
    }

    #[test]
    fn image_prompt_mentions_event() {
        let prompt = build_image_prompt("Tech Meetup", "Monthly gathering", "Hall A");
        assert!(prompt.contains("Tech Meetup"));
        assert!(prompt.contains("Hall A"));
    }
}
