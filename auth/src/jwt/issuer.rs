use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::AccessClaims;
use super::config::SigningConfig;
use super::errors::JwtError;

/// Fixed token lifetime. There is no refresh mechanism; clients log in
/// again when the token expires.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Access-token issuance.
///
/// Signs with HMAC-SHA-256 over the configured secret. Holds only
/// immutable configuration and is safe to share across request handlers.
pub struct TokenIssuer {
    config: SigningConfig,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer from signing configuration.
    ///
    /// # Errors
    /// * `MissingConfiguration` - Key, issuer or audience absent or empty.
    ///   This is a startup fault; an issuer is never constructed with
    ///   incomplete material.
    pub fn new(config: SigningConfig) -> Result<Self, JwtError> {
        config.ensure_complete()?;

        let encoding_key = EncodingKey::from_secret(config.signing_key.as_bytes());
        Ok(Self {
            config,
            encoding_key,
        })
    }

    /// Issue a signed access token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Subject of the token, duplicated into the `userId` claim
    /// * `tenant_id` - Tenant claim, omitted from the token when `None`
    /// * `roles` - Role claim entries, source order preserved
    ///
    /// # Returns
    /// Compact JWT string expiring one hour from now
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(
        &self,
        user_id: &str,
        tenant_id: Option<&str>,
        roles: &[String],
    ) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::seconds(TOKEN_LIFETIME_SECS);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            user_id: user_id.to_string(),
            tenant_id: tenant_id.map(|t| t.to_string()),
            role: roles.to_vec(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
