use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use database::RepositoryError;
use domain_workshops::entity::Entity as Workshops;
use domain_workshops::*;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbErr, EntityTrait, TransactionTrait};
use std::time::Duration;
use test_utils::{TestDataBuilder, TestDatabase, assertions::assert_row_count};

fn create_input(name: &str, description: Option<&str>) -> CreateWorkshop {
    CreateWorkshop {
        name: name.to_string(),
        description: description.map(str::to_string),
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    }
}

#[tokio::test]
async fn test_create_workshop_persists_row() {
    let db = TestDatabase::new().await;
    let service = WorkshopService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_workshop");
    let name = builder.name("workshop", "intro");

    service
        .create_workshop(create_input(&name, Some("Robotics for beginners")))
        .await
        .unwrap();

    let rows = Workshops::find().all(&db.connection).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, name);
    assert_eq!(rows[0].description.as_deref(), Some("Robotics for beginners"));
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
}

#[tokio::test]
async fn test_invalid_workshop_is_not_stored() {
    let db = TestDatabase::new().await;
    let service = WorkshopService::new(db.connection());

    let err = service
        .create_workshop(create_input("", None))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkshopError::Validation(_)));
    assert_row_count(&db.connection, "workshops", 0).await;
}

#[tokio::test]
async fn test_store_failure_is_reported() {
    let db = TestDatabase::new().await;
    let service = WorkshopService::new(db.connection());

    db.connection
        .execute_unprepared("DROP TABLE workshops")
        .await
        .unwrap();

    let err = service
        .create_workshop(create_input("Intro", None))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WorkshopError::Repository(RepositoryError::Database(_))
    ));
}

#[tokio::test]
async fn test_exhausted_pool_is_internal_error() {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_millis(300))
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    let service = WorkshopService::new(db.clone());

    // Hold the only connection so the workflow cannot open its transaction
    let held = db.begin().await.unwrap();

    let err = service
        .create_workshop(create_input("Intro", None))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkshopError::Database(DbErr::ConnectionAcquire(_))));
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

    held.rollback().await.unwrap();
}
