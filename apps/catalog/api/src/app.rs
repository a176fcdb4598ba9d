use axum::Router;
use axum_helpers::{RouterOptions, create_router};

use crate::api;
use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// The complete service: application routes plus docs, fallbacks and middleware.
pub fn build_app(config: &Config, state: &AppState) -> Router {
    create_router::<ApiDoc>(
        api::routes(config, state),
        RouterOptions {
            cors: config.cors.clone(),
            catch_panics: !config.testing,
        },
    )
}
