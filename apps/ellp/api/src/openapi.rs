use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "ELLP API",
        version = "0.1.0",
        description = "Users, documents with audit logging, and workshops"
    ),
    servers((url = "/api", description = "API base path")),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/documents", api = domain_documents::handlers::ApiDoc),
        (path = "/workshops", api = domain_workshops::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
