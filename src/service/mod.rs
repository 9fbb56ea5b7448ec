//! Service Layer
//!
//! Business logic for account registration.

pub mod signup;

// Re-export services
pub use signup::{SignupError, SignupResult, SignupService};
