use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::fmt;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The `x-request-id` assigned to the current request by the router's
/// request-id layer, or `"unknown"` when the header is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown");
        Ok(RequestId(id.to_string()))
    }
}
