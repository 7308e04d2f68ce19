use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    RequestId, SuccessResponse, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use tracing::instrument;
use utoipa::OpenApi;

use crate::entity;
use crate::error::WorkshopResult;
use crate::models::CreateWorkshop;
use crate::service::WorkshopService;

#[derive(OpenApi)]
#[openapi(
    paths(create_workshop),
    components(
        schemas(CreateWorkshop, SuccessResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Workshop scheduling")
    )
)]
pub struct ApiDoc;

pub fn router(service: WorkshopService) -> Router {
    Router::new()
        .route("/", post(create_workshop))
        .with_state(Arc::new(service))
}

/// Schedule a workshop
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateWorkshop,
    responses(
        (status = 200, description = "Workshop created", body = SuccessResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(request_id = %request_id))]
async fn create_workshop(
    State(service): State<Arc<WorkshopService>>,
    request_id: RequestId,
    ValidatedJson(input): ValidatedJson<CreateWorkshop>,
) -> WorkshopResult<Json<SuccessResponse>> {
    service.create_workshop(input).await?;
    Ok(Json(SuccessResponse::ok()))
}
