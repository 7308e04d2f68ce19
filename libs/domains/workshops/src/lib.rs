//! Workshops Domain
//!
//! Scheduling workshops. A workshop has no references to other records, so
//! its workflow is a single insert inside a transaction.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{WorkshopError, WorkshopResult};
pub use models::{CreateWorkshop, NewWorkshop};
pub use service::WorkshopService;
