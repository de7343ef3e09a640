pub mod claims;
pub mod config;
pub mod errors;
pub mod issuer;
pub mod validator;

pub use claims::AccessClaims;
pub use config::SigningConfig;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use issuer::TOKEN_LIFETIME_SECS;
pub use validator::extract_token;
pub use validator::TokenIdentity;
pub use validator::TokenValidator;
