//! Relational storage plumbing for the ELLP API.
//!
//! - [`postgres`]: pool configuration, connection with startup retry,
//!   migrations and health probes
//! - [`transaction`]: the single transaction primitive every write workflow
//!   runs through, plus the repository error classification
//! - [`common`]: connection-level errors and the backoff helper
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "ellp_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod transaction;

pub use common::DatabaseError;
pub use transaction::{RepositoryError, RepositoryResult, TxFuture, run_in_transaction};
