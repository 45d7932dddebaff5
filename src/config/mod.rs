use std::env;

use crate::core::{AppError, Result};

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Which ledger store backend the service reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory fixture store seeded with the sample dataset
    Memory,
    /// MySQL-backed store (requires DATABASE_URL)
    MySql,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Present only when the backend is MySQL
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Origin allowed to call the API; `None` or `*` means permissive
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "mysql" => StoreBackend::MySql,
            other => {
                return Err(AppError::Configuration(format!(
                    "Unknown STORE_BACKEND '{}' (expected 'memory' or 'mysql')",
                    other
                )))
            }
        };

        let database = match backend {
            StoreBackend::MySql => Some(DatabaseConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            store: StoreConfig { backend, database },
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.backend == StoreBackend::MySql && self.store.database.is_none() {
            return Err(AppError::Configuration(
                "MySQL store backend selected but no database configuration loaded".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
