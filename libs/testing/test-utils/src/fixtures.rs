//! Row-level helpers shared by the SQLite and Postgres test databases.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

/// Argon2 PHC string used for seeded users; never verified by tests
pub const SEEDED_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2VlZGVkc2FsdA$c2VlZGVkaGFzaA";

/// Insert a user directly and return its generated id.
pub async fn seed_user(db: &DatabaseConnection, name: &str, email: &str) -> i32 {
    let backend = db.get_database_backend();
    let sql = match backend {
        DbBackend::Postgres => {
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id"
        }
        _ => "INSERT INTO users (name, email, password) VALUES (?, ?, ?) RETURNING id",
    };

    let row = db
        .query_one_raw(Statement::from_sql_and_values(
            backend,
            sql,
            [name.into(), email.into(), SEEDED_PASSWORD_HASH.into()],
        ))
        .await
        .expect("Failed to seed user")
        .expect("Seeded user returned no row");

    row.try_get("", "id").expect("Seeded user id missing")
}

/// `SELECT COUNT(*)` over a whole table
pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one_raw(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .expect("Failed to count rows")
        .expect("COUNT returned no row");

    row.try_get("", "n").expect("COUNT column missing")
}
