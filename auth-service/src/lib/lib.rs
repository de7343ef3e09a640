pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::auth::models::AuthDecision;
pub use domain::auth::models::Credentials;
pub use domain::auth::models::TokenResponse;
pub use domain::auth::models::User;
pub use domain::auth::service::AuthService;
pub use domain::auth::service::AuthorizerService;
