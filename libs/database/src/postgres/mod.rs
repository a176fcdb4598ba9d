//! PostgreSQL connector: pool configuration, connect-with-retry, migrations, health.

mod config;
mod connector;
mod health;

pub use config::{PostgresConfig, DEFAULT_DATABASE_URL};
pub use connector::{
    connect_from_config, connect_from_config_with_retry, connect_with_options, run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
