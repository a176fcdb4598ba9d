//! # Axum Helpers
//!
//! Shared building blocks for the catalog's Axum services.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health/readiness, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] every failure renders as
//! - **[`extractors`]**: [`IdPath`] and [`ValidatedJson`]

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, RouterOptions, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, serve_with_cleanup,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};
