use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use serde_json::Map;
use serde_json::Value;

use super::claims;
use super::config::SigningConfig;
use super::errors::JwtError;

/// Clock-skew tolerance applied to the end of the validity window.
pub const CLOCK_SKEW_SECS: u64 = 300;

/// Identity fallback when a validated token carries no usable claim.
const DEFAULT_IDENTITY: &str = "user";

/// Subject extraction tries these claim names in order before falling back
/// to [`DEFAULT_IDENTITY`].
const SUBJECT_CLAIM_PRECEDENCE: [&str; 2] = [claims::NAME_IDENTIFIER, claims::SUBJECT];

const BEARER_PREFIX: &str = "Bearer ";

/// Identity subset extracted from a validated token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIdentity {
    pub sub: String,
    pub role: String,
}

impl TokenIdentity {
    fn from_claims(claim_set: &Map<String, Value>) -> Self {
        let sub = SUBJECT_CLAIM_PRECEDENCE
            .iter()
            .find_map(|name| claim_set.get(*name).and_then(Value::as_str))
            .unwrap_or(DEFAULT_IDENTITY)
            .to_string();

        let role = claim_set
            .get(claims::ROLE)
            .and_then(first_role)
            .unwrap_or(DEFAULT_IDENTITY)
            .to_string();

        Self { sub, role }
    }
}

/// The role claim is an array when issued by us, but a bare string form
/// from older issuers is also accepted.
fn first_role(value: &Value) -> Option<&str> {
    match value {
        Value::String(role) => Some(role),
        Value::Array(entries) => entries.first().and_then(Value::as_str),
        _ => None,
    }
}

/// Pull a raw token out of an Authorization header value.
///
/// Intermediary proxies are known to double-wrap the scheme, so the
/// case-insensitive `"Bearer "` prefix is stripped in a loop rather than
/// once. Returns `None` when the header is absent or nothing remains after
/// stripping.
pub fn extract_token(header_value: Option<&str>) -> Option<String> {
    let mut token = header_value?.trim();

    loop {
        match token.get(..BEARER_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
                token = token[BEARER_PREFIX.len()..].trim();
            }
            _ => break,
        }
    }

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Access-token validation.
///
/// Verifies signature, issuer, audience and expiry (with skew tolerance on
/// the expiry side only; no `nbf` claim is issued or checked), then
/// extracts the identity subset the authorizer exposes.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a validator from the same signing configuration used for
    /// issuance.
    ///
    /// # Errors
    /// * `MissingConfiguration` - Key, issuer or audience absent or empty
    pub fn new(config: SigningConfig) -> Result<Self, JwtError> {
        config.ensure_complete()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = CLOCK_SKEW_SECS;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.signing_key.as_bytes()),
            validation,
        })
    }

    /// Validate a token and extract its identity subset.
    ///
    /// # Errors
    /// * `InvalidToken` - Any verification failure: bad signature, wrong
    ///   issuer or audience, expired beyond tolerance, malformed token.
    ///   Callers must not surface the detail; it exists for logging.
    pub fn validate(&self, token: &str) -> Result<TokenIdentity, JwtError> {
        let token_data = decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

        Ok(TokenIdentity::from_claims(&token_data.claims))
    }
}
