//! Transaction scoping shared by every write workflow.
//!
//! A workflow hands [`run_in_transaction`] a closure that receives the
//! `&DatabaseTransaction` and runs its repository operations against it.
//! The transaction is committed when the closure returns `Ok` and rolled back
//! when it returns `Err`. If the surrounding future is dropped mid-flight
//! (client disconnect, shutdown) the transaction is dropped uncommitted and
//! sea-orm rolls it back, so no exit path can leave it open.
//!
//! Repository operations take `&DatabaseTransaction` rather than a generic
//! connection, so they cannot be called outside a workflow's transaction and
//! cannot commit or roll back on their own.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionError, TransactionTrait};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error, warn};

/// Future returned by a transactional unit of work
pub type TxFuture<'c, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>;

/// Outcome classification for a single repository statement.
///
/// `NotFound` and `UniqueViolation` are decided from the driver's structured
/// error information, never from message text.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(#[source] DbErr),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = err {
            return Self::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            _ => Self::Database(err),
        }
    }
}

/// Run `work` inside a single transaction on `db`.
///
/// Failing to begin or commit is reported through `E::from(DbErr)`; errors
/// returned by `work` are passed through unchanged after the rollback.
///
/// ```ignore
/// let id = run_in_transaction(&db, move |txn| {
///     Box::pin(async move {
///         let id = repository::insert_document(txn, new_document).await?;
///         repository::insert_log(txn, new_log(id)).await?;
///         Ok(id)
///     })
/// })
/// .await?;
/// ```
pub async fn run_in_transaction<F, T, E>(db: &DatabaseConnection, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T, E> + Send,
    T: Send,
    E: std::error::Error + From<DbErr> + Send,
{
    debug!("starting transaction");

    match db.transaction::<F, T, E>(work).await {
        Ok(value) => {
            debug!("transaction committed");
            Ok(value)
        }
        Err(TransactionError::Transaction(err)) => {
            warn!(error = %err, "transaction rolled back");
            Err(err)
        }
        Err(TransactionError::Connection(err)) => {
            error!(error = %err, "transaction could not be opened or committed");
            Err(E::from(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, Statement};

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("aborted by test")]
        Aborted,
        #[error(transparent)]
        Db(#[from] DbErr),
    }

    async fn sqlite() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        db.execute_unprepared("CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE)")
            .await
            .unwrap();
        db
    }

    async fn count(db: &DatabaseConnection) -> i64 {
        let row = db
            .query_one_raw(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM items",
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get("", "n").unwrap()
    }

    #[tokio::test]
    async fn test_commits_on_ok() {
        let db = sqlite().await;

        let result: Result<(), TestError> = run_in_transaction(&db, |txn| {
            Box::pin(async move {
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('a')").await?;
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('b')").await?;
                Ok(())
            })
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_rolls_back_every_statement_on_err() {
        let db = sqlite().await;

        let result: Result<(), TestError> = run_in_transaction(&db, |txn| {
            Box::pin(async move {
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('a')").await?;
                Err(TestError::Aborted)
            })
        })
        .await;

        assert!(matches!(result, Err(TestError::Aborted)));
        assert_eq!(count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_unique_violation_is_classified() {
        let db = sqlite().await;

        let result: Result<(), TestError> = run_in_transaction(&db, |txn| {
            Box::pin(async move {
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('dup')").await?;
                let second = txn
                    .execute_unprepared("INSERT INTO items (name) VALUES ('dup')")
                    .await
                    .map_err(RepositoryError::from);
                assert!(matches!(second, Err(RepositoryError::UniqueViolation(_))));
                Ok(())
            })
        })
        .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_record_not_found_maps_to_not_found() {
        let err = RepositoryError::from(DbErr::RecordNotFound("users".to_string()));
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_other_errors_stay_database_errors() {
        let err = RepositoryError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_database_error_keeps_driver_cause() {
        use std::error::Error;

        let err = RepositoryError::from(DbErr::Custom("boom".to_string()));
        let source = err.source().expect("driver error as source");
        assert!(source.to_string().contains("boom"));
    }
}
