use std::sync::Arc;

use anyhow::Error;
use auth::PasswordVerifier;
use auth::TokenIssuer;
use auth::TokenValidator;
use auth_service::config::Config;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::auth::service::AuthorizerService;
use auth_service::inbound::http::create_router;
use auth_service::outbound::repositories::PostgresUserGateway;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Signing key and database credentials stay out of the logs
    tracing::info!(
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        jwt_audience = %config.jwt.audience,
        hashing_iterations = config.hashing.iterations,
        hashing_memory_kb = config.hashing.memory_size_kb,
        "Configuration loaded"
    );

    // Incomplete signing material fails startup, not the first request
    let token_issuer = TokenIssuer::new(config.jwt.signing_config())?;
    let token_validator = TokenValidator::new(config.jwt.signing_config())?;
    let password_verifier = PasswordVerifier::new(config.hashing.hashing_options());

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_gateway = Arc::new(PostgresUserGateway::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(
        user_gateway,
        password_verifier,
        token_issuer,
    ));
    let authorizer = Arc::new(AuthorizerService::new(token_validator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        "Server Listening"
    );

    let application = create_router(auth_service, authorizer);
    axum::serve(listener, application).await?;

    Ok(())
}
