use axum::{Router, routing::get};
use axum_helpers::health_router;

use crate::config::Config;
use crate::state::AppState;

pub mod health;
pub mod index;
pub mod products;

/// All application routes: index, liveness, readiness and the product API
/// nested under the configured base path.
///
/// Returns a stateless Router (sub-routers have their state applied).
pub fn routes(config: &Config, state: &AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .merge(health_router())
        .merge(ready_router(state.clone()))
        .nest(&config.base_path, products::router(state))
}

/// Router with the `/ready` endpoint, which pings the database.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
