//! Authentication utilities library
//!
//! Provides the building blocks for the credential-to-token pipeline:
//! - National tax-identifier validation (CPF / CNPJ checksums)
//! - Password verification (Argon2id over salt+digest blobs)
//! - JWT token issuance and validation
//!
//! The hosting service defines its own orchestration and gateways and adapts
//! these implementations. Nothing here performs I/O or holds mutable state;
//! every type is safe to share across request handlers.
//!
//! # Examples
//!
//! ## Document Validation
//! ```
//! assert!(auth::document::is_valid("529.982.247-25"));
//! assert!(!auth::document::is_valid("12345678901"));
//! ```
//!
//! ## Password Verification
//! ```
//! use auth::{HashingOptions, PasswordVerifier};
//!
//! let verifier = PasswordVerifier::new(HashingOptions::default());
//! let hash = verifier.hash("my_password").unwrap();
//! assert!(verifier.verify("my_password", &hash));
//! assert!(!verifier.verify("other_password", &hash));
//! ```
//!
//! ## Token Round-Trip
//! ```
//! use auth::{SigningConfig, TokenIssuer, TokenValidator};
//!
//! let config = SigningConfig::new(
//!     "secret_key_at_least_32_bytes_long!!!",
//!     "my-issuer",
//!     "my-audience",
//! );
//! let issuer = TokenIssuer::new(config.clone()).unwrap();
//! let validator = TokenValidator::new(config).unwrap();
//!
//! let token = issuer.issue("user123", None, &[]).unwrap();
//! let identity = validator.validate(&token).unwrap();
//! assert_eq!(identity.sub, "user123");
//! ```

pub mod document;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::extract_token;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::SigningConfig;
pub use jwt::TokenIdentity;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::HashingOptions;
pub use password::PasswordError;
pub use password::PasswordVerifier;
