//! ELLP API: route composition, configuration and state for the binary.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;
