use std::collections::HashMap;
use std::fmt;

use auth::jwt::TOKEN_LIFETIME_SECS;
use auth::TokenIdentity;
use serde::de;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use uuid::Uuid;

/// Active user as loaded from the user store.
///
/// Read-only from the core's perspective; only the gateway owns it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub document: String,
    pub password_hash: String,
    pub tenant_id: Option<Uuid>,
    /// Role names in store order, duplicates allowed
    pub roles: Vec<String>,
}

/// Login credentials, transient per request.
///
/// Field names are matched case-insensitively on the wire ("document",
/// "Document", "DOCUMENT" all bind), which serde aliases cannot express,
/// hence the hand-written `Deserialize`. Missing fields bind to empty
/// strings so the presence check in the orchestrator decides the outcome.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub document: String,
    pub password: String,
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CredentialsVisitor;

        impl<'de> Visitor<'de> for CredentialsVisitor {
            type Value = Credentials;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object with document and password fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Credentials, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut credentials = Credentials::default();

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("document") {
                        credentials.document = map.next_value::<Option<String>>()?.unwrap_or_default();
                    } else if key.eq_ignore_ascii_case("password") {
                        credentials.password = map.next_value::<Option<String>>()?.unwrap_or_default();
                    } else {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }

                Ok(credentials)
            }
        }

        deserializer.deserialize_map(CredentialsVisitor)
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn new(token: String) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in: TOKEN_LIFETIME_SECS,
        }
    }
}

/// Identity context attached to an allow decision.
#[derive(Debug, Clone, Serialize)]
pub struct AuthContext {
    pub sub: String,
    pub role: String,
    /// String rather than bool: authorizer context values are strings
    #[serde(rename = "tokenValidated")]
    pub token_validated: String,
}

/// Allow/deny decision produced per authorization call.
#[derive(Debug, Clone, Serialize)]
pub struct AuthDecision {
    #[serde(rename = "isAuthorized")]
    pub is_authorized: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AuthContext>,
}

impl AuthDecision {
    pub fn deny() -> Self {
        Self {
            is_authorized: false,
            context: None,
        }
    }

    pub fn allow(identity: TokenIdentity) -> Self {
        Self {
            is_authorized: true,
            context: Some(AuthContext {
                sub: identity.sub,
                role: identity.role,
                token_validated: "true".to_string(),
            }),
        }
    }
}

/// Authorizer invocation payload: the request headers as an unordered,
/// case-sensitive mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeRequest {
    #[serde(default)]
    pub headers: HashMap<String, String>,
}
