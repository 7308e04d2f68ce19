use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"success": true}` acknowledgement returned by write endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
