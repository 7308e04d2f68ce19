use axum::Router;
use domain_documents::DocumentService;
use domain_users::UserService;
use domain_workshops::WorkshopService;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Each domain gets its own service over the shared pool; the returned router
/// is stateless since every sub-router has its state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(
            "/users",
            domain_users::handlers::router(UserService::new(state.db.clone())),
        )
        .nest(
            "/documents",
            domain_documents::handlers::router(DocumentService::new(state.db.clone())),
        )
        .nest(
            "/workshops",
            domain_workshops::handlers::router(WorkshopService::new(state.db.clone())),
        )
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// Merged next to the stateless router returned by `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
