//! API Route Definitions
//!
//! HTTP routes and their corresponding handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{health_check, method_not_allowed, signup, AppState};

/// Maximum accepted request body size (1 MiB)
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Builds the service router.
///
/// `/signup` answers POST only; other methods fall through to a JSON 405.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/signup", post(signup).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
