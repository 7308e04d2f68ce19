//! Custom extractors for Axum handlers.

pub mod request_id;
pub mod validated_json;

pub use request_id::RequestId;
pub use validated_json::ValidatedJson;
