//! In-memory SQLite test database with the workspace migrator applied.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::fixtures;

/// Fresh, isolated database per instance.
///
/// The pool is pinned to a single connection: every connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let user_id = db.seed_user("Ada", "ada@example.com").await;
    /// # }
    /// ```
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to services)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn seed_user(&self, name: &str, email: &str) -> i32 {
        fixtures::seed_user(&self.connection, name, email).await
    }

    pub async fn count_rows(&self, table: &str) -> i64 {
        fixtures::count_rows(&self.connection, table).await
    }
}
