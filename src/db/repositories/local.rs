//! In-memory repository implementation for unit testing and local development.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::repository::{
    ErrorContext, MessageRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Message, MessageId, MAX_DESCRIPTION_LEN};

/// In-memory message store.
///
/// Mirrors the behavior of the SQLite backend: strictly increasing ids
/// starting at 1 and the same description length constraint, so tests
/// written against it transfer to the durable backend.
#[derive(Debug)]
pub struct LocalRepository {
    rows: RwLock<Vec<(i64, String)>>,
    next_id: AtomicI64,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl MessageRepository for LocalRepository {
    async fn save(&self, message: &Message) -> RepositoryResult<Message> {
        if message.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "description exceeds {} characters",
                    MAX_DESCRIPTION_LEN
                ),
                ErrorContext::new("save_message").with_entity("message"),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.write().push((id, message.description.clone()));

        Ok(Message {
            id: Some(MessageId::new(id)),
            description: message.description.clone(),
        })
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Message>> {
        Ok(self
            .rows
            .read()
            .iter()
            .map(|(id, description)| Message {
                id: Some(MessageId::new(*id)),
                description: description.clone(),
            })
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = LocalRepository::new();
        let first = repo.save(&Message::new("first")).await.unwrap();
        let second = repo.save(&Message::new("second")).await.unwrap();

        assert_eq!(first.id, Some(MessageId::new(1)));
        assert_eq!(second.id, Some(MessageId::new(2)));
    }

    #[tokio::test]
    async fn test_save_ignores_caller_supplied_id() {
        let repo = LocalRepository::new();
        let mut msg = Message::new("sneaky");
        msg.id = Some(MessageId::new(999));

        let stored = repo.save(&msg).await.unwrap();
        assert_eq!(stored.id, Some(MessageId::new(1)));
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = LocalRepository::new();
        let all = repo.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_description_rejected() {
        let repo = LocalRepository::new();
        let result = repo.save(&Message::new("x".repeat(201))).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ValidationError { .. })
        ));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_description_at_limit_accepted() {
        let repo = LocalRepository::new();
        let stored = repo.save(&Message::new("x".repeat(200))).await.unwrap();
        assert_eq!(stored.description.len(), 200);
    }

    #[tokio::test]
    async fn test_health_check_always_ok() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
    }
}
