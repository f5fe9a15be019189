//! Repository trait for message persistence.
//!
//! The trait is the seam between the service layer and the storage
//! backends; see `repositories::sqlite` and `repositories::local` for the
//! two implementations.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::Message;

/// Repository trait for message storage.
///
/// # Contract
///
/// - `save` assigns a fresh, strictly increasing identifier on every
///   insert and returns the stored record including it.
/// - `find_all` returns every stored record; the order is
///   implementation-defined and callers must not rely on it. An empty
///   store yields an empty vec, never an error.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message and return the stored copy with its id.
    ///
    /// The `id` field of the input is ignored; the store always assigns
    /// a new one. Fails if the store is unreachable or rejects the write
    /// (e.g. the description length constraint).
    async fn save(&self, message: &Message) -> RepositoryResult<Message>;

    /// Return every stored message.
    async fn find_all(&self) -> RepositoryResult<Vec<Message>>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
