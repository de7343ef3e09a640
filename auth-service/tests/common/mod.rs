#![allow(dead_code)]

use std::sync::Arc;

use auth::HashingOptions;
use auth::PasswordVerifier;
use auth::SigningConfig;
use auth::TokenIssuer;
use auth::TokenValidator;
use auth_service::domain::auth::models::User;
use auth_service::domain::auth::ports::UserGateway;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::auth::service::AuthorizerService;
use auth_service::inbound::http::create_router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use http_body_util::BodyExt;
use mockall::mock;
use tower::ServiceExt;
use uuid::Uuid;

pub const SIGNING_KEY: &str = "test_secret_key_at_least_32_bytes!";
pub const ISSUER: &str = "OficinaMecanicaApi";
pub const AUDIENCE: &str = "AuthorizedServices";

mock! {
    pub Gateway {}

    #[async_trait::async_trait]
    impl UserGateway for Gateway {
        async fn find_active_user(&self, document: &str) -> Result<Option<User>, String>;
    }
}

pub fn signing_config() -> SigningConfig {
    SigningConfig::new(SIGNING_KEY, ISSUER, AUDIENCE)
}

/// Low-cost Argon2 parameters to keep the suite fast.
pub fn hashing_options() -> HashingOptions {
    HashingOptions {
        salt_size: 16,
        hash_size: 32,
        iterations: 1,
        memory_size_kb: 1024,
        parallelism: 1,
    }
}

pub fn password_verifier() -> PasswordVerifier {
    PasswordVerifier::new(hashing_options())
}

pub fn hash_password(password: &str) -> String {
    password_verifier()
        .hash(password)
        .expect("failed to hash password")
}

pub fn test_user(document: &str, password_hash: &str) -> User {
    User {
        id: Uuid::new_v4(),
        document: document.to_string(),
        password_hash: password_hash.to_string(),
        tenant_id: None,
        roles: vec![],
    }
}

pub fn token_issuer() -> TokenIssuer {
    TokenIssuer::new(signing_config()).expect("failed to build issuer")
}

pub fn token_validator() -> TokenValidator {
    TokenValidator::new(signing_config()).expect("failed to build validator")
}

pub fn router_with_gateway(gateway: MockGateway) -> Router {
    let auth_service = Arc::new(AuthService::new(
        Arc::new(gateway),
        password_verifier(),
        token_issuer(),
    ));
    let authorizer = Arc::new(AuthorizerService::new(token_validator()));

    create_router(auth_service, authorizer)
}

/// POST a JSON body and return status plus parsed response body.
pub async fn post_json(
    router: Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    send(router, request).await
}

/// POST with no body at all (missing content type included).
pub async fn post_empty(router: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request");

    send(router, request).await
}

/// POST a raw body with a JSON content type (for malformed payloads).
pub async fn post_raw(router: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(request)
        .await
        .expect("request handling failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response is not JSON")
    };

    (status, json)
}
