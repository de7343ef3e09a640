use thiserror::Error;

/// Error type for password operations.
///
/// Only hash *generation* reports errors; verification is infallible by
/// contract and collapses every malformed input to a non-match.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
