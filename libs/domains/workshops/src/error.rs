use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum WorkshopError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type WorkshopResult<T> = Result<T, WorkshopError>;

impl From<WorkshopError> for AppError {
    fn from(err: WorkshopError) -> Self {
        match err {
            WorkshopError::Validation(errors) => AppError::ValidationError(errors),
            WorkshopError::Repository(RepositoryError::Database(e)) | WorkshopError::Database(e) => {
                AppError::Database(e)
            }
            WorkshopError::Repository(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for WorkshopError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
