use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

fn error_body(status: StatusCode, code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: code.code(),
        error: code.as_str().to_string(),
        message: code.default_message().to_string(),
        details: None,
    });

    (status, body).into_response()
}

/// Router fallback for unknown paths
pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, ErrorCode::NotFound)
}

pub async fn method_not_allowed() -> Response {
    error_body(StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed)
}
