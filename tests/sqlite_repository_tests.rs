//! Tests for the Diesel/SQLite repository.
//!
//! SQLite needs no server; each test runs against its own database file
//! under the system temp directory, created by the embedded migrations
//! and removed on drop.

#![cfg(feature = "sqlite-repo")]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use tree_messages::db::repositories::{SqliteConfig, SqliteRepository};
use tree_messages::db::repository::{MessageRepository, RepositoryError};
use tree_messages::models::{Message, MessageId};

static DB_COUNTER: AtomicU32 = AtomicU32::new(0);

struct TempDb {
    path: PathBuf,
}

impl TempDb {
    fn new() -> Self {
        let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "tree-messages-test-{}-{}.db",
            std::process::id(),
            n
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }

    fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn open_repo(db: &TempDb) -> SqliteRepository {
    SqliteRepository::new(SqliteConfig::with_url(db.url())).unwrap()
}

#[tokio::test]
async fn test_migrations_create_an_empty_store() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    let all = repo.find_all().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_save_assigns_increasing_ids_and_round_trips() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    let first = repo.save(&Message::new("first")).await.unwrap();
    let second = repo.save(&Message::new("second")).await.unwrap();

    assert_eq!(first.id, Some(MessageId::new(1)));
    assert_eq!(second.id, Some(MessageId::new(2)));
    assert_eq!(first.description, "first");

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}

#[tokio::test]
async fn test_check_constraint_maps_to_validation_error() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    let result = repo.save(&Message::new("x".repeat(201))).await;

    assert!(matches!(
        result,
        Err(RepositoryError::ValidationError { .. })
    ));

    // The rejected write left no row behind
    let all = repo.find_all().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_description_at_limit_accepted() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    let stored = repo.save(&Message::new("x".repeat(200))).await.unwrap();
    assert_eq!(stored.description.len(), 200);
}

#[tokio::test]
async fn test_unicode_descriptions_round_trip() {
    let db = TempDb::new();
    let repo = open_repo(&db);
    let text = "Chúc mừng Giáng Sinh 🎄";

    let stored = repo.save(&Message::new(text)).await.unwrap();
    assert_eq!(stored.description, text);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all[0].description, text);
}

#[tokio::test]
async fn test_reopening_database_preserves_rows_and_id_sequence() {
    let db = TempDb::new();

    {
        let repo = open_repo(&db);
        let stored = repo.save(&Message::new("persisted")).await.unwrap();
        assert_eq!(stored.id, Some(MessageId::new(1)));
    }

    // Reopening runs the (now no-op) migrations again and sees the row
    let repo = open_repo(&db);
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "persisted");

    let next = repo.save(&Message::new("after reopen")).await.unwrap();
    assert_eq!(next.id, Some(MessageId::new(2)));
}

#[tokio::test]
async fn test_health_check_reports_connected() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    assert!(repo.health_check().await.unwrap());
    assert!(repo.is_healthy().await);
}

#[tokio::test]
async fn test_pool_stats_track_queries_and_failures() {
    let db = TempDb::new();
    let repo = open_repo(&db);

    repo.save(&Message::new("counted")).await.unwrap();
    let _ = repo.save(&Message::new("x".repeat(500))).await;
    repo.find_all().await.unwrap();

    let stats = repo.get_pool_stats();
    assert_eq!(stats.max_size, 10);
    assert!(stats.total_connections >= 1);
    assert!(stats.total_queries >= 3);
    // The constraint violation is non-retryable and counts as a failure
    assert_eq!(stats.failed_queries, 1);
}
