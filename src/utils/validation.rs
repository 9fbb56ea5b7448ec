//! Validation Utilities
//!
//! Input validation functions for signup payloads.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum length (in characters) accepted for name fields
pub const MAX_NAME_LENGTH: usize = 128;

/// Minimum length (in characters) accepted for passwords
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Characters rejected in name fields to keep markup and control
/// sequences out of stored profile data
const NAME_FORBIDDEN_CHARS: &[char] = &['<', '>', '{', '}', '\n', '\r', '\t'];

/// Validates a canonical username: 3-64 characters, letters, digits,
/// or underscores only
pub fn validate_username(username: &str) -> bool {
    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]{3,64}$").expect("Failed to compile username regex")
    });

    regex.is_match(username)
}

/// Validates email address format
pub fn validate_email(email: &str) -> bool {
    validator::validate_email(email)
}

/// Validates an optional name field that has already been normalized.
///
/// Returns the message describing the first constraint the value breaks.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(messages::NAME_TOO_LONG);
    }
    if name.contains(NAME_FORBIDDEN_CHARS) {
        return Err(messages::NAME_UNSUPPORTED_CHARS);
    }
    Ok(())
}

/// Validation error messages surfaced to clients
pub mod messages {
    pub const INVALID_BODY: &str = "invalid request body";
    pub const INVALID_USERNAME: &str =
        "username must be 3-64 characters and use letters, digits, or underscores";
    pub const PASSWORD_TOO_SHORT: &str = "password must be at least 12 characters";
    pub const INVALID_EMAIL: &str = "invalid email address";
    pub const NAME_TOO_LONG: &str = "names must be fewer than 128 characters";
    pub const NAME_UNSUPPORTED_CHARS: &str = "names contain unsupported characters";
}
