//! User Model
//!
//! Persisted user data structures.

/// Field set for inserting a new user row.
///
/// Optional fields left as `None` are stored as SQL `NULL` rather than empty
/// strings. The password is carried only as a bcrypt hash at this point; the
/// raw credential never reaches the persistence layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Canonical (lowercased, trimmed) username, unique per account
    pub username: String,

    /// bcrypt hash of the account password
    pub password_hash: String,

    /// Optional normalized email address
    pub email: Option<String>,

    /// Optional given name
    pub first_name: Option<String>,

    /// Optional family name
    pub last_name: Option<String>,
}
