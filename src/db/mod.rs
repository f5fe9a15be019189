//! Database module for message storage.
//!
//! This module provides abstractions for database operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ SqliteRepository  (Diesel)   │
//!     │ LocalRepository   (memory)   │
//!     └──────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! Use the service layer functions with any repository implementation:
//!
//! ```ignore
//! use tree_messages::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_local();
//!     let message = services::create_message(repo.as_ref(), "hello").await?;
//!     Ok(())
//! }
//! ```

// Feature flag priority: sqlite > local
// When multiple features are enabled (e.g., --all-features), sqlite takes precedence.
#[cfg(not(any(feature = "sqlite-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer ====================

pub use services::{create_message, health_check, list_messages};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::{PoolStats, SqliteConfig, SqliteRepository};
pub use repository::{ErrorContext, MessageRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn MessageRepository>> = OnceLock::new();

// Priority: sqlite > local (when --all-features is used)
#[cfg(feature = "sqlite-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn MessageRepository>> {
    let config = SqliteConfig::from_env().map_err(RepositoryError::configuration)?;
    let repo = RepositoryFactory::create_sqlite(&config)?;
    Ok(repo as Arc<dyn MessageRepository>)
}

#[cfg(all(feature = "local-repo", not(feature = "sqlite-repo")))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn MessageRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn MessageRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Database not initialized. Call init_repository() first.")
}
