use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authorize;
use super::handlers::login;
use crate::domain::auth::ports::UserGateway;
use crate::domain::auth::service::AuthService;
use crate::domain::auth::service::AuthorizerService;

/// Application state shared by the two endpoints.
pub struct AppState<G>
where
    G: UserGateway,
{
    pub auth_service: Arc<AuthService<G>>,
    pub authorizer: Arc<AuthorizerService>,
}

// Manual impl: derive(Clone) would demand G: Clone, which the Arc does
// not need.
impl<G> Clone for AppState<G>
where
    G: UserGateway,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            authorizer: Arc::clone(&self.authorizer),
        }
    }
}

pub fn create_router<G>(
    auth_service: Arc<AuthService<G>>,
    authorizer: Arc<AuthorizerService>,
) -> Router
where
    G: UserGateway,
{
    let state = AppState {
        auth_service,
        authorizer,
    };

    // Headers are excluded from the span: the Authorization value is a
    // credential
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/auth/login", post(login::<G>))
        .route("/auth/authorize", post(authorize::<G>))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
