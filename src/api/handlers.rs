//! HTTP Request Handlers
//!
//! Axum handlers for processing HTTP requests and responses.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;

use crate::{
    models::{HealthCheckResponse, MessageResponse, SignupRequest},
    service::SignupService,
    utils::error::{json_response, AppError, AppResult},
    utils::validation::messages,
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub signup_service: Arc<SignupService>,
}

/// Registers a new account.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that trailing data after the JSON value is rejected; `serde_json` only
/// enforces end-of-input on its top-level entry points.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    // An oversized body surfaces here as a rejection from the body limit.
    let body = body.map_err(|_| AppError::Validation(messages::INVALID_BODY.to_string()))?;

    let mut request: SignupRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::Validation(messages::INVALID_BODY.to_string()))?;

    request.normalize();
    request
        .validate()
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    state.signup_service.register_user(request).await?;

    Ok(json_response(
        StatusCode::CREATED,
        &MessageResponse {
            message: "account created".to_string(),
        },
    ))
}

/// Fallback for unsupported methods on routed paths
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> AppResult<Response> {
    state.signup_service.health_check().await?;

    Ok(json_response(
        StatusCode::OK,
        &HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: VERSION.to_string(),
        },
    ))
}
