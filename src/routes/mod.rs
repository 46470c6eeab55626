//! HTTP routes for Tally Server.

mod calculate;
mod greet;
mod system;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::request_id::request_log_middleware;
use crate::state::AppState;

/// Builds the main application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", get(calculate::calculate))
        .route("/greet", get(greet::greet))
        .route("/health", get(system::health))
        .layer(middleware::from_fn(request_log_middleware))
        .with_state(state)
}
