use std::collections::HashMap;
use std::sync::Arc;

use auth::document;
use auth::extract_token;
use auth::PasswordVerifier;
use auth::TokenIssuer;
use auth::TokenValidator;

use super::errors::AuthError;
use super::models::AuthDecision;
use super::models::Credentials;
use super::models::TokenResponse;
use super::ports::UserGateway;

const MSG_CREDENTIALS_REQUIRED: &str = "Documento identificador e senha são obrigatórios.";
const MSG_INVALID_DOCUMENT: &str = "Documento identificador inválido.";
const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado ou inativo.";
const MSG_WRONG_PASSWORD: &str = "Senha incorreta.";

/// Diagnostic values are logged as a fixed-length prefix only.
const MASK_PREFIX_LEN: usize = 20;

fn mask(value: &str) -> String {
    if value.chars().count() > MASK_PREFIX_LEN {
        let prefix: String = value.chars().take(MASK_PREFIX_LEN).collect();
        format!("{}...", prefix)
    } else {
        value.to_string()
    }
}

/// Login orchestrator: credential-to-token pipeline.
///
/// Sequences document validation, user lookup, password verification and
/// token issuance, terminal on the first failure. Generic over the user
/// gateway for testability.
pub struct AuthService<G>
where
    G: UserGateway,
{
    user_gateway: Arc<G>,
    password_verifier: PasswordVerifier,
    token_issuer: TokenIssuer,
}

impl<G> AuthService<G>
where
    G: UserGateway,
{
    pub fn new(
        user_gateway: Arc<G>,
        password_verifier: PasswordVerifier,
        token_issuer: TokenIssuer,
    ) -> Self {
        Self {
            user_gateway,
            password_verifier,
            token_issuer,
        }
    }

    /// Exchange credentials for a signed access token.
    ///
    /// # Errors
    /// * `InvalidInput` - Document or password missing
    /// * `Unauthorized` - Invalid document, unknown/inactive user, or
    ///   wrong password. The three cases share a status so callers cannot
    ///   probe which check tripped; the messages differ for the caller's
    ///   own diagnostics.
    /// * `DatabaseError` - User store could not be queried
    /// * `TokenGeneration` - Token could not be signed
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, AuthError> {
        // Presence means non-empty, not non-blank: a whitespace-only
        // document passes here and fails the checksum below as
        // Unauthorized, revealing nothing about which check tripped
        if credentials.document.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::InvalidInput(MSG_CREDENTIALS_REQUIRED.to_string()));
        }

        // Checksum failure is deliberately Unauthorized, not InvalidInput
        if !document::is_valid(&credentials.document) {
            return Err(AuthError::Unauthorized(MSG_INVALID_DOCUMENT.to_string()));
        }

        // Lookup uses the original, possibly punctuated document string
        let user = self
            .user_gateway
            .find_active_user(&credentials.document)
            .await
            .map_err(AuthError::DatabaseError)?
            .ok_or_else(|| AuthError::Unauthorized(MSG_USER_NOT_FOUND.to_string()))?;

        if !self
            .password_verifier
            .verify(&credentials.password, &user.password_hash)
        {
            return Err(AuthError::Unauthorized(MSG_WRONG_PASSWORD.to_string()));
        }

        let tenant_id = user.tenant_id.map(|id| id.to_string());
        let token =
            self.token_issuer
                .issue(&user.id.to_string(), tenant_id.as_deref(), &user.roles)?;

        tracing::info!(user_id = %user.id, roles = user.roles.len(), "Token issued");

        Ok(TokenResponse::new(token))
    }
}

/// Authorization orchestrator: token-to-decision pipeline.
///
/// Never fails: every fault along the way collapses into a deny decision,
/// with the detail kept in the logs.
pub struct AuthorizerService {
    token_validator: TokenValidator,
}

impl AuthorizerService {
    pub fn new(token_validator: TokenValidator) -> Self {
        Self { token_validator }
    }

    /// Decide whether the request carrying these headers is authorized.
    ///
    /// The header map is unordered and case-sensitive at this boundary:
    /// the lowercase `authorization` key is probed first, then the
    /// canonical `Authorization` spelling.
    pub fn authorize(&self, headers: &HashMap<String, String>) -> AuthDecision {
        let header = headers
            .get("authorization")
            .or_else(|| headers.get("Authorization"));

        tracing::info!(
            authorization_present = header.is_some(),
            "Authorization requested"
        );

        if let Some(value) = header {
            tracing::debug!(header_prefix = %mask(value), "Authorization header received");
        }

        let token = match extract_token(header.map(String::as_str)) {
            Some(token) => token,
            None => {
                tracing::warn!("Token not provided or empty after stripping scheme");
                return AuthDecision::deny();
            }
        };

        tracing::debug!(token_prefix = %mask(&token), "Token extracted");

        match self.token_validator.validate(&token) {
            Ok(identity) => {
                tracing::info!(sub = %identity.sub, "Token validated");
                AuthDecision::allow(identity)
            }
            Err(error) => {
                tracing::warn!(error = %error, "Token rejected");
                AuthDecision::deny()
            }
        }
    }
}
