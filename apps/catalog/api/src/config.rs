use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_flag, env_or_default, server::ServerConfig};
use tower_http::cors::CorsLayer;

// Import database configs from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Mount point of the product routes when `PRODUCTS_BASE_PATH` is unset.
pub const DEFAULT_BASE_PATH: &str = "/products";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    /// Where the product routes are nested, e.g. `/products`
    pub base_path: String,
    /// Strict mode: handler panics are not converted into 500 responses
    pub testing: bool,
    pub cors: Option<CorsLayer>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let database = PostgresConfig::from_env()?;
        let base_path = normalize_base_path(&env_or_default("PRODUCTS_BASE_PATH", DEFAULT_BASE_PATH))?;
        let testing = env_flag("TESTING", false)?;
        let cors = axum_helpers::cors_layer_from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            base_path,
            testing,
            cors,
        })
    }
}

/// `"products/"` becomes `"/products"`; the root itself is rejected.
fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Err(ConfigError::ParseError {
            key: "PRODUCTS_BASE_PATH".to_string(),
            details: "products cannot be mounted at the root path".to_string(),
        });
    }

    Ok(format!("/{}", trimmed))
}
