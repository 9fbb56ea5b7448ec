//! Signup Service Implementation
//!
//! Core registration workflow: duplicate check, password hashing, and the
//! persistence write.

use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;
use tokio::time::timeout;
use uuid::Uuid;

use crate::models::{NewUser, SignupRequest};
use crate::utils::{
    error::AppError,
    security::{hash_password_with_cost, DEFAULT_BCRYPT_COST},
};

/// Upper bound on a single registration attempt, covering both the duplicate
/// lookup and the insert.
const REGISTRATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Unique constraint backing username uniqueness. The insert maps violations
/// of this constraint to [`SignupError::UsernameTaken`], so the duplicate
/// pre-check losing a race still yields the same outcome.
const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

/// Message shown to clients when the username is already registered
const ACCOUNT_EXISTS: &str = "account exists, please sign in";

/// Errors produced by the signup service
#[derive(Error, Debug)]
pub enum SignupError {
    /// An account with the requested username already exists
    #[error("account already exists")]
    UsernameTaken,

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing operation failed
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The registration deadline elapsed before the work completed
    #[error("registration deadline exceeded")]
    Timeout,
}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::UsernameTaken => AppError::Conflict(ACCOUNT_EXISTS.to_string()),
            SignupError::Database(e) => AppError::Database(e),
            SignupError::Hashing(e) => AppError::Hashing(e),
            SignupError::Timeout => AppError::Internal("registration deadline exceeded".to_string()),
        }
    }
}

/// Result type for signup service operations
pub type SignupResult<T> = Result<T, SignupError>;

/// Registers new accounts against the users table.
///
/// Expects payloads already in canonical form (see
/// [`SignupRequest::normalize`]); usernames are compared exactly as given.
#[derive(Clone)]
pub struct SignupService {
    /// Database connection pool
    db_pool: PgPool,

    /// bcrypt cost factor, fixed for every request
    bcrypt_cost: u32,
}

impl SignupService {
    /// Creates a new SignupService backed by the provided connection pool
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Registers a new account.
    ///
    /// Looks up the username, hashes the password, and inserts the record.
    /// The whole sequence is bounded by a five second deadline; dropping the
    /// future (client disconnect) cancels any in-flight database call.
    pub async fn register_user(&self, request: SignupRequest) -> SignupResult<()> {
        timeout(REGISTRATION_TIMEOUT, self.register(request))
            .await
            .map_err(|_| SignupError::Timeout)?
    }

    async fn register(&self, request: SignupRequest) -> SignupResult<()> {
        // Fail fast with a friendly conflict when the username is taken. The
        // unique constraint on the insert below remains the actual guarantee.
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE username = $1")
            .bind(&request.username)
            .fetch_optional(&self.db_pool)
            .await?;
        if existing.is_some() {
            return Err(SignupError::UsernameTaken);
        }

        let password_hash = hash_password_with_cost(request.password.reveal(), self.bcrypt_cost)?;

        let new_user = NewUser {
            username: request.username,
            password_hash,
            email: request.email.filter(|v| !v.is_empty()),
            first_name: request.first_name.filter(|v| !v.is_empty()),
            last_name: request.last_name.filter(|v| !v.is_empty()),
        };

        self.insert_user(&new_user).await
    }

    async fn insert_user(&self, user: &NewUser) -> SignupResult<()> {
        sqlx::query(
            "INSERT INTO users (username, password_hash, email, first_name, last_name) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.email.as_deref())
        .bind(user.first_name.as_deref())
        .bind(user.last_name.as_deref())
        .execute(&self.db_pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err)
                if db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT) =>
            {
                SignupError::UsernameTaken
            }
            other => SignupError::Database(other),
        })?;

        Ok(())
    }

    /// Health check for the service
    pub async fn health_check(&self) -> SignupResult<()> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }
}
