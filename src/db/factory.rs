//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::{SqliteConfig, SqliteRepository};
use super::repository::{MessageRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// SQLite + Diesel implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "db" => Ok(Self::Sqlite),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Sqlite if a database URL is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() || std::env::var("SQLITE_DATABASE_URL").is_ok() {
            Self::Sqlite
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use tree_messages::db::{RepositoryFactory, RepositoryType};
///
/// let local_repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// For `Sqlite`, configuration is taken from the environment
    /// (`SqliteConfig::from_env`).
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn MessageRepository>> {
        match repo_type {
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let config = SqliteConfig::from_env()
                        .map_err(RepositoryError::configuration)?;
                    let repo = Self::create_sqlite(&config)?;
                    Ok(repo as Arc<dyn MessageRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "SQLite repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a SQLite repository.
    #[cfg(feature = "sqlite-repo")]
    pub fn create_sqlite(config: &SqliteConfig) -> RepositoryResult<Arc<SqliteRepository>> {
        let repo = SqliteRepository::new(config.clone())?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn MessageRepository> {
        Arc::new(LocalRepository::new())
    }
}
