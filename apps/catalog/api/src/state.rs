//! Shared application state.

use sea_orm::DatabaseConnection;

/// Cloned into handlers that need the pool directly (readiness).
/// Product routes get their own repository built from `db`.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
