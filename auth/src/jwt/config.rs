use super::errors::JwtError;

/// Immutable signing material shared by issuance and validation.
///
/// Loaded once at startup and passed explicitly at construction time;
/// nothing reads signing configuration ambiently per call.
#[derive(Debug, Clone)]
pub struct SigningConfig {
    /// Symmetric HMAC secret. Never logged.
    pub signing_key: String,
    pub issuer: String,
    pub audience: String,
}

impl SigningConfig {
    pub fn new(
        signing_key: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Reject empty signing material eagerly.
    pub(crate) fn ensure_complete(&self) -> Result<(), JwtError> {
        if self.signing_key.trim().is_empty()
            || self.issuer.trim().is_empty()
            || self.audience.trim().is_empty()
        {
            return Err(JwtError::MissingConfiguration);
        }

        Ok(())
    }
}
