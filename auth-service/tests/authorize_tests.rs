mod common;

use auth::SigningConfig;
use auth::TokenIssuer;
use axum::http::StatusCode;
use common::MockGateway;
use serde_json::json;

fn issue_token(roles: &[&str]) -> String {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    common::token_issuer()
        .issue("user123", None, &roles)
        .expect("failed to issue token")
}

#[tokio::test]
async fn test_authorize_without_header_denies() {
    let router = common::router_with_gateway(MockGateway::new());

    let (status, body) =
        common::post_json(router, "/auth/authorize", json!({"headers": {}})).await;

    // The authorizer boundary always answers 200 with a decision
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthorized"], false);
    assert!(body.get("context").is_none());
}

#[tokio::test]
async fn test_authorize_missing_body_denies() {
    let router = common::router_with_gateway(MockGateway::new());

    let (status, body) = common::post_empty(router, "/auth/authorize").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthorized"], false);
}

#[tokio::test]
async fn test_authorize_garbage_token_denies() {
    let router = common::router_with_gateway(MockGateway::new());

    let (status, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"authorization": "Bearer not.a.token"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthorized"], false);
}

#[tokio::test]
async fn test_authorize_token_signed_with_other_key_denies() {
    let other_issuer = TokenIssuer::new(SigningConfig::new(
        "another_secret_key_at_least_32_bytes!",
        common::ISSUER,
        common::AUDIENCE,
    ))
    .expect("failed to build issuer");
    let token = other_issuer
        .issue("user123", None, &[])
        .expect("failed to issue token");

    let router = common::router_with_gateway(MockGateway::new());

    let (_, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"authorization": format!("Bearer {}", token)}}),
    )
    .await;

    assert_eq!(body["isAuthorized"], false);
}

#[tokio::test]
async fn test_authorize_valid_token_allows_with_context() {
    let token = issue_token(&["Cliente", "Administrador"]);
    let router = common::router_with_gateway(MockGateway::new());

    let (status, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"authorization": format!("Bearer {}", token)}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthorized"], true);
    assert_eq!(body["context"]["sub"], "user123");
    assert_eq!(body["context"]["role"], "Cliente");
    assert_eq!(body["context"]["tokenValidated"], "true");
}

#[tokio::test]
async fn test_authorize_canonical_header_casing_allows() {
    let token = issue_token(&[]);
    let router = common::router_with_gateway(MockGateway::new());

    let (_, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"Authorization": format!("Bearer {}", token)}}),
    )
    .await;

    assert_eq!(body["isAuthorized"], true);
    // No role claim in the token: identity falls back to "user"
    assert_eq!(body["context"]["role"], "user");
}

#[tokio::test]
async fn test_authorize_double_wrapped_scheme_allows() {
    let token = issue_token(&["Cliente"]);
    let router = common::router_with_gateway(MockGateway::new());

    let (_, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"authorization": format!("Bearer Bearer {}", token)}}),
    )
    .await;

    assert_eq!(body["isAuthorized"], true);
    assert_eq!(body["context"]["sub"], "user123");
}

#[tokio::test]
async fn test_authorize_bare_scheme_denies() {
    let router = common::router_with_gateway(MockGateway::new());

    let (_, body) = common::post_json(
        router,
        "/auth/authorize",
        json!({"headers": {"authorization": "Bearer "}}),
    )
    .await;

    assert_eq!(body["isAuthorized"], false);
}
