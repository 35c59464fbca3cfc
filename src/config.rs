//! Application configuration constants.
//!
//! Database location is resolved at startup; everything else is a compile-time
//! constant shared by the store and the analysis code.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

impl AppConfig {
    /// Parse config.toml contents, ignoring files that don't parse
    pub fn from_toml(contents: &str) -> Self {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config.toml: {}", e);
                Self::default()
            }
        }
    }

    fn database_path(&self) -> Option<&str> {
        self.database.as_ref()?.path.as_deref()
    }
}

/// Pick the database path with priority: config file > env value > default
pub fn resolve_database_path(config: &AppConfig, env_path: Option<String>) -> PathBuf {
    // Priority 1: config.toml
    if let Some(path) = config.database_path() {
        tracing::info!("Using database from config.toml: {}", path);
        return PathBuf::from(path);
    }

    // Priority 2: .env DATABASE_PATH
    if let Some(path) = env_path {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = std::fs::read_to_string(paths::CONFIG_FILE)
        .map(|contents| AppConfig::from_toml(&contents))
        .unwrap_or_default();

    resolve_database_path(&config, std::env::var("DATABASE_PATH").ok())
}

// ==================== Severity ====================

/// Error count at which a mistake is shown at full severity
pub const MAX_SEVERITY: u8 = 5;

// ==================== Query Limits ====================

/// Surahs listed in the "most mistakes" breakdown
pub const STATS_TOP_SURAHS_LIMIT: usize = 5;

/// Repeated mistakes listed on the dashboard
pub const STATS_TOP_REPEATED_LIMIT: usize = 6;
