use auth::JwtError;
use thiserror::Error;

/// Top-level error type for the authentication flow.
///
/// `InvalidInput` and `Unauthorized` carry caller-safe messages surfaced
/// verbatim; every other variant is logged in full at the boundary and
/// replaced with a generic message.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Token generation failed: {0}")]
    TokenGeneration(#[from] JwtError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
