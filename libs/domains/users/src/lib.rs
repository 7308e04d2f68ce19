//! Users Domain
//!
//! Registration of users with unique emails and hashed passwords.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /users
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, transaction, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← single statements against a DatabaseTransaction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← sea-orm model of `users`
//! └─────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_users::{handlers, UserService};
//!
//! # fn example(db: sea_orm::DatabaseConnection) {
//! let service = UserService::new(db);
//! let router = handlers::router(service);
//! # }
//! ```
//!
//! The repository is public so other domains can check user existence inside
//! their own transactions.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use hasher::{Argon2Hasher, CredentialHasher, HashError};
pub use models::{CreateUser, NewUser, User};
pub use service::UserService;
