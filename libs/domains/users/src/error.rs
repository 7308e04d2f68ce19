use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::hasher::HashError;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("email {0} already registered")]
    EmailTaken(String),

    #[error(transparent)]
    PasswordHash(#[from] HashError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::EmailTaken(email) => {
                AppError::Conflict(format!("email {} already registered", email))
            }
            UserError::PasswordHash(e) => AppError::InternalServerError(e.to_string()),
            UserError::Repository(RepositoryError::Database(e)) | UserError::Database(e) => {
                AppError::Database(e)
            }
            UserError::Repository(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
