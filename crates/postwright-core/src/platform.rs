//! Target platforms and their posting constraints.
//!
//! The catalog is an ordered, immutable value: the prompt builder and the
//! length check both receive it explicitly, so adding a platform is a
//! configuration change rather than a code change. The order of entries is
//! the order in which posts are generated and displayed.
use serde::{Deserialize, Serialize};

use crate::error::{PostwrightError, Result};

/// Posting constraints for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub name: String,
    /// Maximum post length in characters (inclusive).
    pub limit: usize,
    pub style: String,
    pub features: String,
}

impl PlatformSpec {
    pub fn new(
        name: impl Into<String>,
        limit: usize,
        style: impl Into<String>,
        features: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            limit,
            style: style.into(),
            features: features.into(),
        }
    }

    pub fn linkedin() -> Self {
        Self::new(
            "LinkedIn",
            700,
            "professional networking post with hashtags",
            "Include relevant hashtags and professional language",
        )
    }

    pub fn twitter() -> Self {
        Self::new(
            "Twitter",
            280,
            "concise and engaging tweet",
            "Include relevant hashtags and mentions if appropriate",
        )
    }

    pub fn whatsapp() -> Self {
        Self::new(
            "WhatsApp",
            500,
            "casual and personal message",
            "Use emojis and friendly tone",
        )
    }

    /// Character count of `text` checked against this platform's limit.
    ///
    /// The count is a raw number of Unicode scalar values: no grapheme
    /// clustering, emoji width or markup stripping.
    pub fn length_status(&self, text: &str) -> LengthStatus {
        let count = text.chars().count();
        LengthStatus {
            count,
            limit: self.limit,
            within_limit: count <= self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthStatus {
    pub count: usize,
    pub limit: usize,
    pub within_limit: bool,
}

/// Ordered lookup table of [`PlatformSpec`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlatformSpec>", into = "Vec<PlatformSpec>")]
pub struct PlatformCatalog(Vec<PlatformSpec>);

impl Default for PlatformCatalog {
    /// LinkedIn, Twitter, WhatsApp.
    fn default() -> Self {
        Self(vec![
            PlatformSpec::linkedin(),
            PlatformSpec::twitter(),
            PlatformSpec::whatsapp(),
        ])
    }
}

impl PlatformCatalog {
    /// Build a catalog from explicit entries.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::Invalid`] – empty list, blank or duplicate names,
    ///   or a zero limit.
    pub fn new(platforms: Vec<PlatformSpec>) -> Result<Self> {
        if platforms.is_empty() {
            return Err(PostwrightError::Invalid(
                "platform catalog must not be empty".into(),
            ));
        }

        for (idx, spec) in platforms.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(PostwrightError::Invalid(format!(
                    "platform #{idx} has an empty name"
                )));
            }
            if spec.limit == 0 {
                return Err(PostwrightError::Invalid(format!(
                    "platform `{}` has a zero character limit",
                    spec.name
                )));
            }
            if platforms[..idx].iter().any(|p| p.name == spec.name) {
                return Err(PostwrightError::Invalid(format!(
                    "platform `{}` is listed twice",
                    spec.name
                )));
            }
        }

        Ok(Self(platforms))
    }

    /// Look up a platform by its exact name.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::UnknownPlatform`] – no entry is named `name`; there is no fallback.
    pub fn get(&self, name: &str) -> Result<&PlatformSpec> {
        self.0
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| PostwrightError::UnknownPlatform {
                name: name.to_owned(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformSpec> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `length_status(text, platform)` over this catalog.
    pub fn length_status(&self, text: &str, platform: &str) -> Result<LengthStatus> {
        Ok(self.get(platform)?.length_status(text))
    }
}

impl TryFrom<Vec<PlatformSpec>> for PlatformCatalog {
    type Error = PostwrightError;

    fn try_from(value: Vec<PlatformSpec>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlatformCatalog> for Vec<PlatformSpec> {
    fn from(value: PlatformCatalog) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a PlatformCatalog {
    type Item = &'a PlatformSpec;
    type IntoIter = std::slice::Iter<'a, PlatformSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_limits() {
        let catalog = PlatformCatalog::default();
        let limits: Vec<_> = catalog.iter().map(|p| (p.name.as_str(), p.limit)).collect();
        assert_eq!(
            limits,
            vec![("LinkedIn", 700), ("Twitter", 280), ("WhatsApp", 500)]
        );
    }

    #[test]
    fn within_limit_is_inclusive() {
        let catalog = PlatformCatalog::default();
        for spec in &catalog {
            for len in [0, spec.limit - 1, spec.limit, spec.limit + 1, spec.limit * 2] {
                let text = "x".repeat(len);
                let status = catalog.length_status(&text, &spec.name).unwrap();
                assert_eq!(status.count, len);
                assert_eq!(status.limit, spec.limit);
                assert_eq!(status.within_limit, len <= spec.limit, "{} @ {len}", spec.name);
            }
        }
    }

    #[test]
    fn count_is_per_character_not_per_byte() {
        let status = PlatformSpec::twitter().length_status("héllo 🎉");
        assert_eq!(status.count, 7);
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let err = PlatformCatalog::default()
            .length_status("hi", "Mastodon")
            .unwrap_err();
        assert!(matches!(err, PostwrightError::UnknownPlatform { name } if name == "Mastodon"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(PlatformCatalog::default().get("twitter").is_err());
    }

    #[test]
    fn deserialising_runs_validation() {
        let ok: PlatformCatalog = serde_json::from_str(
            r#"[{"name":"Bluesky","limit":300,"style":"short","features":"no hashtags"}]"#,
        )
        .unwrap();
        assert_eq!(ok.get("Bluesky").unwrap().limit, 300);

        let dup = serde_json::from_str::<PlatformCatalog>(
            r#"[{"name":"A","limit":1,"style":"","features":""},{"name":"A","limit":1,"style":"","features":""}]"#,
        );
        assert!(dup.is_err());
    }

    #[test]
    fn rejects_duplicate_and_zero_limit_entries() {
        assert!(PlatformCatalog::new(vec![]).is_err());
        assert!(
            PlatformCatalog::new(vec![PlatformSpec::twitter(), PlatformSpec::twitter()]).is_err()
        );
        assert!(PlatformCatalog::new(vec![PlatformSpec::new("Bluesky", 0, "s", "f")]).is_err());
        assert!(PlatformCatalog::new(vec![PlatformSpec::new("Bluesky", 300, "s", "f")]).is_ok());
    }
}
