use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Which reference on the document failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Owner,
    Reviewer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Owner => f.write_str("owner"),
            UserRole::Reviewer => f.write_str("reviewer"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{role} {id} not found")]
    UserNotFound { role: UserRole, id: i32 },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Validation(errors) => AppError::ValidationError(errors),
            DocumentError::UserNotFound { .. } => AppError::BadRequest("user not found".to_string()),
            DocumentError::Repository(RepositoryError::Database(e)) | DocumentError::Database(e) => {
                AppError::Database(e)
            }
            DocumentError::Repository(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
