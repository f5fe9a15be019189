//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files, as an alternative to environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
///
/// ```toml
/// [repository]
/// type = "sqlite"
///
/// [sqlite]
/// database_url = "messages.db"
/// max_connections = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub sqlite: SqliteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// SQLite connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqliteSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Parse the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        self.repository
            .repo_type
            .parse()
            .map_err(RepositoryError::configuration)
    }

    /// Convert the SQLite settings into a backend configuration.
    #[cfg(feature = "sqlite-repo")]
    pub fn to_sqlite_config(&self) -> super::repositories::SqliteConfig {
        super::repositories::SqliteConfig {
            database_url: self.sqlite.database_url.clone(),
            max_pool_size: self.sqlite.max_connections,
            min_pool_size: self.sqlite.min_connections,
            connection_timeout_sec: self.sqlite.connect_timeout,
            idle_timeout_sec: self.sqlite.idle_timeout,
            max_retries: self.sqlite.max_retries,
            retry_delay_ms: self.sqlite.retry_delay_ms,
        }
    }
}
