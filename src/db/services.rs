//! Service layer for message operations.
//!
//! High-level functions that work with any [`MessageRepository`]
//! implementation. Pure delegation: the original system performs no
//! normalization or validation here, and neither does this one — an empty
//! description is stored as-is.

use crate::db::repository::{MessageRepository, RepositoryResult};
use crate::models::Message;

/// Create a new message from a description and persist it.
///
/// Returns the stored message including its generated id.
pub async fn create_message(
    repo: &dyn MessageRepository,
    description: impl Into<String>,
) -> RepositoryResult<Message> {
    let message = Message::new(description);
    repo.save(&message).await
}

/// Return every stored message.
///
/// The order is whatever the store produces; callers must not rely on it.
pub async fn list_messages(repo: &dyn MessageRepository) -> RepositoryResult<Vec<Message>> {
    repo.find_all().await
}

/// Verify the backing store is reachable.
pub async fn health_check(repo: &dyn MessageRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
