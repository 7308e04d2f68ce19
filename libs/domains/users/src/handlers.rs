use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    RequestId, SuccessResponse, ValidatedJson,
    errors::responses::{BadRequestResponse, ConflictResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use tracing::instrument;
use utoipa::OpenApi;

use crate::entity;
use crate::error::UserResult;
use crate::hasher::CredentialHasher;
use crate::models::CreateUser;
use crate::service::UserService;

#[derive(OpenApi)]
#[openapi(
    paths(create_user),
    components(
        schemas(CreateUser, SuccessResponse),
        responses(BadRequestResponse, ConflictResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "User registration")
    )
)]
pub struct ApiDoc;

pub fn router<H: CredentialHasher + 'static>(service: UserService<H>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user::<H>))
        .with_state(shared_service)
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = SuccessResponse),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(request_id = %request_id))]
async fn create_user<H: CredentialHasher + 'static>(
    State(service): State<Arc<UserService<H>>>,
    request_id: RequestId,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<SuccessResponse>> {
    service.create_user(input).await?;
    Ok(Json(SuccessResponse::ok()))
}
