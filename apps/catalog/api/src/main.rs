use axum_helpers::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);
    info!(
        app = config.app.name,
        version = config.app.version,
        base_path = %config.base_path,
        testing = config.testing,
        "Starting catalog API"
    );

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .wrap_err("PostgreSQL connection failed")?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .wrap_err("Database migration failed")?;

    let state = AppState { db };
    let router = app::build_app(&config, &state);

    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");
            match state.db.close().await {
                Ok(()) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .wrap_err("Server error")?;

    info!("Catalog API shutdown complete");
    Ok(())
}
