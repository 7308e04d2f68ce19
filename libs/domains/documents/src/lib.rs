//! Documents Domain
//!
//! Creating a document checks that its owner and reviewer exist, inserts the
//! document and appends a `create` entry to the audit log, all in one
//! transaction.
//!
//! ```rust,no_run
//! use domain_documents::{handlers, DocumentService};
//!
//! # fn example(db: sea_orm::DatabaseConnection) {
//! let router = handlers::router(DocumentService::new(db));
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{DocumentError, DocumentResult, UserRole};
pub use models::{CreateDocument, LogAction, NewDocument, NewLog};
pub use service::DocumentService;
