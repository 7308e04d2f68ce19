use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    RequestId, SuccessResponse, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use tracing::instrument;
use utoipa::OpenApi;

use crate::entity::document;
use crate::error::DocumentResult;
use crate::models::CreateDocument;
use crate::service::DocumentService;

#[derive(OpenApi)]
#[openapi(
    paths(create_document),
    components(
        schemas(CreateDocument, SuccessResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = document::Model::TAG, description = "Documents and their audit trail")
    )
)]
pub struct ApiDoc;

pub fn router(service: DocumentService) -> Router {
    Router::new()
        .route("/", post(create_document))
        .with_state(Arc::new(service))
}

/// Create a document owned by `userId` and reviewed by `reviewerId`
#[utoipa::path(
    post,
    path = "",
    tag = document::Model::TAG,
    request_body = CreateDocument,
    responses(
        (status = 200, description = "Document and audit entry created", body = SuccessResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(request_id = %request_id))]
async fn create_document(
    State(service): State<Arc<DocumentService>>,
    request_id: RequestId,
    ValidatedJson(input): ValidatedJson<CreateDocument>,
) -> DocumentResult<Json<SuccessResponse>> {
    service.create_document(input).await?;
    Ok(Json(SuccessResponse::ok()))
}
