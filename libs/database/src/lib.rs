//! Database library providing the PostgreSQL connector and shared utilities
//!
//! The catalog service persists through SeaORM on PostgreSQL. This crate owns
//! everything between "I have a `DATABASE_URL`" and "I have a migrated pool":
//! configuration, connection with retry, migrations, and health probes.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
