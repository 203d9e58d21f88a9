//! Route definitions for the Cuedeck HTTP API.
//!
//! All REST routes are mounted under `/api`; the live viewer channel lives
//! at `/ws/live`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(cue_routes())
        .merge(observability_routes());

    let ws_routes = Router::new().route("/ws/live", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state.config.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, verify, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/verify", get(handlers::auth::verify))
        .route("/logout", post(handlers::auth::logout))
}

/// Cue CRUD and trigger
fn cue_routes() -> Router<AppState> {
    Router::new()
        .route("/cues", get(handlers::cue::list_cues))
        .route("/cues", post(handlers::cue::create_cue))
        .route("/cues/{id}", put(handlers::cue::update_cue))
        .route("/cues/{id}", delete(handlers::cue::delete_cue))
        .route("/cues/trigger/{id}", post(handlers::cue::trigger_cue))
}

/// Connection count and liveness
fn observability_routes() -> Router<AppState> {
    Router::new()
        .route("/connections", get(handlers::ws::connection_count))
        .route("/health", get(handlers::health::health))
}
