use thiserror::Error;

use crate::password::PasswordError;
use crate::token::TokenError;

/// Error type for persistence collaborator failures.
///
/// These are infrastructure problems (connectivity, query failures), not
/// business rejections; business rejections travel inside
/// [`crate::models::AuthResponse`].
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Infrastructure-level error surfaced by the authentication core.
///
/// Lets the request-handling layer pick a different HTTP status for an
/// outage than for an ordinary credential rejection.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
