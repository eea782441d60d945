use std::sync::Arc;

use auth::BearerScheme;
use auth::JwtHandler;
use gate_service::config::Config;
use gate_service::domain::exemption::policy::ExemptionPolicy;
use gate_service::domain::gate::service::AuthenticationGate;
use gate_service::domain::token::codec::TokenCodec;
use gate_service::domain::user::service::IdentityResolver;
use gate_service::inbound::http::router::create_router;
use gate_service::outbound::repositories::PostgresUserRepository;
use gate_service::outbound::verifiers::JwtSubjectVerifier;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gate_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gate-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        scheme = %config.authentication.scheme,
        legacy_module = %config.authentication.legacy_module,
        exempt_path_fragments = ?config.authentication.exempt_path_fragments,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let mut jwt_handler = JwtHandler::new(config.jwt.secret.as_bytes());
    if let Some(issuer) = &config.jwt.issuer {
        jwt_handler = jwt_handler.with_issuer(issuer);
    }

    let gate = Arc::new(AuthenticationGate::new(
        ExemptionPolicy::from(&config.authentication),
        TokenCodec::new(
            BearerScheme::new(config.authentication.scheme.clone()),
            Arc::new(JwtSubjectVerifier::new(jwt_handler)),
        ),
        IdentityResolver::new(Arc::new(PostgresUserRepository::new(pg_pool))),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(gate)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
