//! Database test fixtures
//!
//! Every test gets its own database, so tests never clean up after each
//! other and can run in parallel.

use simplenotes::backend::server::connect_database;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fresh in-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:")
        .await
        .expect("Failed to create in-memory test database")
}

/// File-backed database living in a temporary directory
///
/// The directory (and database) is removed when the fixture drops. Use
/// this when a test needs the data to outlive one pool.
pub struct TestDatabase {
    dir: TempDir,
}

impl TestDatabase {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.dir.path().join("simplenotes-test.db").display()
        )
    }

    pub async fn pool(&self) -> SqlitePool {
        connect_database(&self.url())
            .await
            .expect("Failed to open test database")
    }
}
