//! End-to-end tests through the fully composed router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::server::{create_router_with_cors, health_router};
use core_config::{Environment, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;
use ellp_api::{AppState, Config, api, openapi::ApiDoc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDatabase, assertions::assert_row_count};
use tower::ServiceExt; // For oneshot()
use tower_http::cors::CorsLayer;

fn app(db: &TestDatabase) -> Router {
    let state = AppState {
        config: Config {
            app: app_info!(),
            database: PostgresConfig::new("sqlite::memory:"),
            server: ServerConfig::default(),
            environment: Environment::Development,
            run_migrations: false,
        },
        db: db.connection(),
    };

    create_router_with_cors::<ApiDoc>(api::routes(&state), CorsLayer::new())
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_then_document_then_workshop() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(post_json(
            "/api/users",
            json!({"name": "Ada", "email": "ada@example.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!({"success": true}));

    let response = app(&db)
        .oneshot(post_json(
            "/api/documents",
            json!({"name": "Spec", "userId": 1, "reviewerId": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&db)
        .oneshot(post_json(
            "/api/workshops",
            json!({"name": "Intro", "description": "First session", "date": "2025-03-14"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_row_count(&db.connection, "users", 1).await;
    assert_row_count(&db.connection, "documents", 1).await;
    assert_row_count(&db.connection, "logs", 1).await;
    assert_row_count(&db.connection, "workshops", 1).await;
}

#[tokio::test]
async fn test_duplicate_registration_returns_409() {
    let db = TestDatabase::new().await;
    let body = json!({"name": "Ada", "email": "ada@example.com", "password": "pw"});

    let first = app(&db).oneshot(post_json("/api/users", body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app(&db).oneshot(post_json("/api/users", body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json_body(second.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
    assert!(body["message"].as_str().unwrap().contains("ada@example.com"));

    assert_row_count(&db.connection, "users", 1).await;
}

#[tokio::test]
async fn test_document_with_unknown_reviewer_leaves_no_rows() {
    let db = TestDatabase::new().await;
    db.seed_user("Owner", "owner@example.com").await;

    let response = app(&db)
        .oneshot(post_json(
            "/api/documents",
            json!({"name": "Spec", "userId": 1, "reviewerId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response.into_body()).await["message"], "user not found");
    assert_row_count(&db.connection, "documents", 0).await;
    assert_row_count(&db.connection, "logs", 0).await;
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/workshops")
                .header("content-type", "application/json")
                .header("x-request-id", "trace-me")
                .body(Body::from(json!({"name": "Intro", "date": "2025-03-14"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn test_health_and_ready() {
    let db = TestDatabase::new().await;

    let health = app(&db)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    let body = json_body(health.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "ellp_api");

    let ready = app(&db)
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
    let body = json_body(ready.into_body()).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["info"]["title"], "ELLP API");
    assert!(body["paths"].as_object().unwrap().len() >= 3);
}

#[tokio::test]
async fn test_get_on_create_endpoint_is_405() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(Request::get("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
