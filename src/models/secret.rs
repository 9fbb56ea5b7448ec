//! Credential Wrapper
//!
//! Opaque holder for sensitive credential material. Every default rendering
//! path (Debug, Display, JSON serialization) emits a fixed placeholder; the
//! raw value is only reachable through [`Secret::reveal`].

use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Placeholder emitted by `Debug` and `Display`.
const REDACTED: &str = "[REDACTED]";

/// Placeholder emitted when serializing to JSON.
const REDACTED_JSON: &str = "***redacted***";

/// Wraps a credential value so it cannot leak through logging or encoding.
///
/// Deserialization rejects empty values; use [`Secret::reveal`] at the one
/// point that actually needs the raw secret.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret value. Guard access carefully.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(REDACTED_JSON)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(D::Error::custom("secret value must not be empty"));
        }
        Ok(Secret(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let secret = Secret::new("hunter2hunter2");

        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }

    #[test]
    fn test_serialization_redacts() {
        let secret = Secret::new("hunter2hunter2");
        let serialized = serde_json::to_string(&secret).unwrap();

        assert_eq!(serialized, "\"***redacted***\"");
        assert!(!serialized.contains("hunter2"));
    }

    #[test]
    fn test_deserialization_preserves_value() {
        let secret: Secret = serde_json::from_str("\"supersecretpw\"").unwrap();
        assert_eq!(secret.reveal(), "supersecretpw");
    }

    #[test]
    fn test_deserialization_rejects_empty_value() {
        let result: Result<Secret, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_reveal_returns_raw_value() {
        let secret = Secret::new("correct horse battery staple");
        assert_eq!(secret.reveal(), "correct horse battery staple");
    }
}
