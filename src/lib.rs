//! Account Signup Service
//!
//! A small HTTP service that registers new user accounts. It validates and
//! normalizes a JSON signup payload, checks for username collisions, hashes
//! the password with bcrypt, and persists the record to PostgreSQL.
//!
//! # Features
//!
//! - **Strict payload handling**: unknown fields, trailing data, and bodies
//!   over 1 MiB are rejected before any business logic runs
//! - **Canonical storage**: usernames and emails are trimmed and lowercased
//!   so `"Alice"` and `"alice"` are the same account
//! - **Credential hygiene**: passwords live in a redacting wrapper and leave
//!   it only at the hashing boundary
//! - **Constraint-backed uniqueness**: the duplicate pre-check is a UX
//!   nicety; the database unique index is the guarantee
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use signup_service::{
//!     api::{create_routes, AppState},
//!     service::SignupService,
//!     DatabaseConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = config.create_pool().await?;
//!
//!     let app_state = AppState {
//!         signup_service: Arc::new(SignupService::new(pool)),
//!     };
//!     let app = create_routes().with_state(app_state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers and route definitions
//! - **Service Layer**: the registration workflow
//! - **Models**: payloads, the credential wrapper, persisted structures
//! - **Database**: connection management
//! - **Utils**: errors, hashing, validation

/// HTTP API layer with handlers and routing
pub mod api;

/// Configuration management
pub mod config;

/// Database connection management and configuration
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic for account registration
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState};
pub use config::{AppConfig, ServerConfig};
pub use database::{DatabaseConfig, DatabasePool};
pub use models::{NewUser, Secret, SignupRequest};
pub use service::{SignupError, SignupService};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
