use serde::Serialize;

/// Claim names used by issuance and extraction.
///
/// Kept as explicit constants; token parsing never depends on ambient
/// claim-type remapping.
pub const SUBJECT: &str = "sub";
pub const USER_ID: &str = "userId";
pub const TENANT_ID: &str = "tenantId";
pub const ROLE: &str = "role";
pub const NAME_IDENTIFIER: &str = "nameid";

/// Claim set carried by an access token.
///
/// `sub` and `userId` duplicate the same value; `userId` stays for
/// backward-compatible consumers. `tenantId` is omitted entirely when the
/// user has no tenant, and `role` is an order-preserving array omitted
/// when empty (a JSON object cannot repeat a claim name per role).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccessClaims {
    pub sub: String,

    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "tenantId", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    pub iss: String,
    pub aud: String,
}
