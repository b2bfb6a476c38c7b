//! Opaque, user-supplied provider credential.
//!
//! The key is handed to a provider for a single call and never stored by the
//! adapters. `Debug` and `Display` are redacted so a stray `{:?}` in a log
//! line cannot leak it.
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key for building the request header. Do not log.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `true` when the key is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_never_reveals_the_key() {
        let key = ApiKey::new("sk-live-123");
        assert!(!format!("{key:?}").contains("sk-live"));
        assert!(!format!("{key}").contains("sk-live"));
        assert_eq!(key.expose(), "sk-live-123");
    }

    #[test]
    fn whitespace_key_is_blank() {
        assert!(ApiKey::new("  ").is_blank());
        assert!(!ApiKey::new("k").is_blank());
    }
}
