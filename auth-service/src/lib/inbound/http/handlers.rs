use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthDecision;
use crate::domain::auth::models::AuthorizeRequest;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::TokenResponse;
use crate::domain::auth::ports::UserGateway;
use crate::inbound::http::router::AppState;

const MSG_BODY_REQUIRED: &str = "Request body é obrigatório";
const MSG_INVALID_REQUEST: &str = "Request inválido";
const MSG_INTERNAL_ERROR: &str = "Erro interno no servidor";

/// Standardized API success response
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.data)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(msg) => ApiError::BadRequest(msg),
            AuthError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            // Detail never reaches the caller; it was already logged
            AuthError::TokenGeneration(_) | AuthError::DatabaseError(_) => {
                ApiError::InternalServerError(MSG_INTERNAL_ERROR.to_string())
            }
        }
    }
}

/// POST /auth/login
///
/// Exchanges a document/password pair for a signed access token. The body
/// and the credential fields themselves are never logged.
pub async fn login<G: UserGateway>(
    State(state): State<AppState<G>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    tracing::info!("Login request received");

    let credentials = match payload {
        Ok(Json(credentials)) => credentials,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Login request body rejected");
            let message = match rejection {
                JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                    MSG_INVALID_REQUEST
                }
                _ => MSG_BODY_REQUIRED,
            };
            return Err(ApiError::BadRequest(message.to_string()));
        }
    };

    match state.auth_service.login(&credentials).await {
        Ok(response) => {
            tracing::info!("Token generated successfully");
            Ok(ApiSuccess::new(response))
        }
        Err(error @ (AuthError::InvalidInput(_) | AuthError::Unauthorized(_))) => {
            tracing::warn!(error = %error, "Login rejected");
            Err(error.into())
        }
        Err(error) => {
            tracing::error!(error = %error, "Unexpected login failure");
            Err(error.into())
        }
    }
}

/// POST /auth/authorize
///
/// Authorizer-style invocation: the caller supplies the request headers as
/// a JSON mapping and always receives a decision object, never an error.
pub async fn authorize<G: UserGateway>(
    State(state): State<AppState<G>>,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> Json<AuthDecision> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Authorize request body rejected");
            return Json(AuthDecision::deny());
        }
    };

    Json(state.authorizer.authorize(&request.headers))
}
