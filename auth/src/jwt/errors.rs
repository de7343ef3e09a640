use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    /// Signing key, issuer or audience is absent or empty. Raised at
    /// construction time; a process with incomplete signing material must
    /// not come up.
    #[error("JWT signing configuration is missing")]
    MissingConfiguration,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Single opaque validation failure. The detail string is for internal
    /// logging only and must never reach a caller.
    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
