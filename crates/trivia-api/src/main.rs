//! Trivia API server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use trivia_api::config::Config;
use trivia_api::error::AppError;
use trivia_api::session::SessionCookie;
use trivia_api::state::AppState;
use trivia_api::{build_router, telemetry};
use trivia_core::clock::SystemClock;
use trivia_core::rng::{DeterministicRng, SystemRng};
use trivia_random_play::store::InMemoryPlaySessionStore;
use trivia_store::pg_quiz_repository::PgQuizRepository;
use trivia_store::pg_tip_repository::PgTipRepository;
use trivia_store::schema;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    info!("Starting Trivia API server");

    // Create database connection pool and bring the schema up to date.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    schema::run_migrations(&pool).await?;

    // Build application state.
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(SystemRng::from_entropy()));
    let app_state = AppState::new(
        Arc::new(SystemClock),
        rng,
        Arc::new(PgQuizRepository::new(pool.clone())),
        Arc::new(PgTipRepository::new(pool)),
        Arc::new(InMemoryPlaySessionStore::new()),
        SessionCookie {
            name: config.session_cookie_name.clone(),
            secure: config.session_cookie_secure,
        },
    );

    let app = build_router(app_state);

    // Start server.
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    telemetry.shutdown();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
