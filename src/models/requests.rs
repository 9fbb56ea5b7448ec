//! Request and Response Models
//!
//! Data structures for API request and response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::secret::Secret;
use crate::utils::validation::{self, messages, MIN_PASSWORD_LENGTH};

/// Request payload for registering a new account.
///
/// Unknown fields are rejected at the deserialization boundary. Callers must
/// run [`SignupRequest::normalize`] before [`SignupRequest::validate`];
/// validation assumes canonical (trimmed, case-folded) values.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    /// Account username, unique per account once canonicalized
    pub username: String,

    /// Account password, redacted on every default rendering path
    pub password: Secret,

    /// Optional email address
    #[serde(default)]
    pub email: Option<String>,

    /// Optional given name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Optional family name
    #[serde(default)]
    pub last_name: Option<String>,
}

impl SignupRequest {
    /// Trims and case-folds fields in place so comparison and storage are
    /// consistent. Optional fields that are empty after trimming become
    /// `None`. Idempotent.
    pub fn normalize(&mut self) {
        self.username = self.username.trim().to_lowercase();
        self.email = take_trimmed(&mut self.email).map(|email| email.to_lowercase());
        self.first_name = take_trimmed(&mut self.first_name);
        self.last_name = take_trimmed(&mut self.last_name);
    }

    /// Validates the normalized payload, returning the message for the first
    /// failed check. Checks run in a fixed order: username, password, email,
    /// then names.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !validation::validate_username(&self.username) {
            return Err(messages::INVALID_USERNAME);
        }

        if self.password.reveal().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(messages::PASSWORD_TOO_SHORT);
        }

        if let Some(email) = &self.email {
            if !validation::validate_email(email) {
                return Err(messages::INVALID_EMAIL);
            }
        }

        if let Some(first_name) = &self.first_name {
            validation::validate_name(first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            validation::validate_name(last_name)?;
        }

        Ok(())
    }
}

/// Trims an optional field in place, dropping values that are empty after
/// trimming.
fn take_trimmed(field: &mut Option<String>) -> Option<String> {
    field
        .take()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Response body for successful signup
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignupRequest {
        SignupRequest {
            username: "bob12345".to_string(),
            password: Secret::new("supersecretpw"),
            email: Some("bob@example.com".to_string()),
            first_name: Some("Bob".to_string()),
            last_name: None,
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let mut request = SignupRequest {
            username: "  Bob12345 ".to_string(),
            password: Secret::new("supersecretpw"),
            email: Some(" Bob@Example.COM ".to_string()),
            first_name: Some("  Bob ".to_string()),
            last_name: Some("  ".to_string()),
        };

        request.normalize();

        assert_eq!(request.username, "bob12345");
        assert_eq!(request.email.as_deref(), Some("bob@example.com"));
        assert_eq!(request.first_name.as_deref(), Some("Bob"));
        assert_eq!(request.last_name, None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut request = SignupRequest {
            username: " MixedCase_7 ".to_string(),
            password: Secret::new("supersecretpw"),
            email: Some("USER@EXAMPLE.COM".to_string()),
            first_name: Some(" Ann ".to_string()),
            last_name: Some("Lee".to_string()),
        };

        request.normalize();
        let snapshot = (
            request.username.clone(),
            request.email.clone(),
            request.first_name.clone(),
            request.last_name.clone(),
        );

        request.normalize();

        assert_eq!(request.username, snapshot.0);
        assert_eq!(request.email, snapshot.1);
        assert_eq!(request.first_name, snapshot.2);
        assert_eq!(request.last_name, snapshot.3);
    }

    #[test]
    fn test_validate_accepts_canonical_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_after_normalize_accepts_mixed_case_input() {
        let mut request = valid_request();
        request.username = " Bob12345 ".to_string();

        request.normalize();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_username() {
        let mut request = valid_request();
        request.username = "no spaces allowed".to_string();

        assert_eq!(request.validate(), Err(messages::INVALID_USERNAME));
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let mut request = valid_request();
        request.password = Secret::new("elevenchars");

        assert_eq!(request.validate(), Err(messages::PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_validate_accepts_twelve_character_password() {
        let mut request = valid_request();
        request.password = Secret::new("twelve chars");

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_invalid_email() {
        let mut request = valid_request();
        request.email = Some("not-an-email".to_string());

        assert_eq!(request.validate(), Err(messages::INVALID_EMAIL));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut request = valid_request();
        request.first_name = Some("<b>Bob</b>".to_string());
        assert_eq!(request.validate(), Err(messages::NAME_UNSUPPORTED_CHARS));

        let mut request = valid_request();
        request.last_name = Some("x".repeat(129));
        assert_eq!(request.validate(), Err(messages::NAME_TOO_LONG));
    }

    #[test]
    fn test_validate_reports_first_failure_only() {
        // Both username and password are invalid; the username check runs first.
        let mut request = valid_request();
        request.username = "x".to_string();
        request.password = Secret::new("short");

        assert_eq!(request.validate(), Err(messages::INVALID_USERNAME));
    }

    #[test]
    fn test_deserialization_rejects_unknown_fields() {
        let result: Result<SignupRequest, _> = serde_json::from_str(
            r#"{"username":"bob12345","password":"supersecretpw","admin":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_defaults_optional_fields() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"username":"bob12345","password":"supersecretpw"}"#).unwrap();

        assert_eq!(request.email, None);
        assert_eq!(request.first_name, None);
        assert_eq!(request.last_name, None);
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let rendered = format!("{:?}", valid_request());

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("supersecretpw"));
    }
}
