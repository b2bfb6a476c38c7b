//! Generator settings read from a TOML file.
//!
//! Every key is optional; a missing file section falls back to the built-in
//! defaults, so an empty document is a valid configuration.
//!
//! ```toml
//! request_timeout_secs = 30
//! concurrent_platforms = true
//!
//! [endpoints]
//! openai = "http://localhost:8080/v1"
//!
//! [[platforms]]
//! name = "Mastodon"
//! limit = 500
//! style = "friendly toot"
//! features = "Use a couple of hashtags"
//! ```
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use postwright_core::PlatformCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn’t read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound for every provider call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Generate the platform posts concurrently instead of one after another.
    #[serde(default)]
    pub concurrent_platforms: bool,

    #[serde(default)]
    pub platforms: PlatformCatalog,

    #[serde(default)]
    pub endpoints: EndpointConfig,
}

/// Base URL overrides, e.g. for a gateway or a local mock server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<String>,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            concurrent_platforms: false,
            platforms: PlatformCatalog::default(),
            endpoints: EndpointConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(
            config.platforms.names().collect::<Vec<_>>(),
            ["LinkedIn", "Twitter", "WhatsApp"]
        );
    }

    #[test]
    fn platforms_and_endpoints_override_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            request_timeout_secs = 5
            concurrent_platforms = true

            [endpoints]
            claude = "http://localhost:4010/v1"

            [[platforms]]
            name = "Mastodon"
            limit = 500
            style = "friendly toot"
            features = "Use a couple of hashtags"
            "#,
        )
        .unwrap();

        assert_eq!(config.request_timeout_secs, 5);
        assert!(config.concurrent_platforms);
        assert_eq!(config.platforms.len(), 1);
        assert_eq!(config.platforms.get("Mastodon").unwrap().limit, 500);
        assert_eq!(
            config.endpoints.claude.as_deref(),
            Some("http://localhost:4010/v1")
        );
        assert_eq!(config.endpoints.openai, None);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(matches!(
            GeneratorConfig::from_toml_str("request_timeout_secs = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn duplicate_platforms_are_rejected() {
        let err = GeneratorConfig::from_toml_str(
            r#"
            [[platforms]]
            name = "Twitter"
            limit = 280
            style = "a"
            features = "b"

            [[platforms]]
            name = "Twitter"
            limit = 280
            style = "a"
            features = "b"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GeneratorConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
