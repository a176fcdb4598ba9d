//! Server infrastructure: router assembly with docs and middleware, liveness
//! and readiness helpers, and graceful shutdown with cleanup.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router, RouterOptions};
//!
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router()), RouterOptions::default());
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{RouterOptions, create_production_app, create_router, serve_with_cleanup};
pub use health::{HealthCheckFuture, HealthResponse, health_handler, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
