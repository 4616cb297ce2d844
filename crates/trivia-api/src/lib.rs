//! Trivia quiz service: HTTP layer.
//!
//! Everything is exposed as JSON "render directives", objects tagged by a
//! `view` field that name the page a front end should render.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;

use crate::state::AppState;

/// Assembles every route of the service on top of `state`.
pub fn build_router(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with configured origins once a
    // front end is deployed on a separate host.
    Router::new()
        .merge(routes::health::router())
        .merge(routes::random_play::router())
        .merge(routes::quizzes::router())
        .merge(routes::tips::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
