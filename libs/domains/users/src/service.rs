use database::{RepositoryError, run_in_transaction};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::hasher::{Argon2Hasher, CredentialHasher, HashError};
use crate::models::{CreateUser, NewUser};
use crate::repository;

/// Registration workflow.
///
/// The pool and the hasher are injected; the service holds no other state
/// and is shared across requests behind an `Arc`.
pub struct UserService<H: CredentialHasher = Argon2Hasher> {
    db: DatabaseConnection,
    hasher: Arc<H>,
}

impl UserService<Argon2Hasher> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_hasher(db, Argon2Hasher)
    }
}

impl<H: CredentialHasher + 'static> UserService<H> {
    pub fn with_hasher(db: DatabaseConnection, hasher: H) -> Self {
        Self {
            db,
            hasher: Arc::new(hasher),
        }
    }

    /// Register a user.
    ///
    /// An existing email is a conflict whether the pre-check finds it or the
    /// unique constraint rejects the insert (two concurrent registrations).
    /// Nothing is written unless every step succeeds.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<()> {
        debug!("validating body");
        input.validate()?;

        let hasher = Arc::clone(&self.hasher);
        let email = input.email.clone();

        run_in_transaction::<_, _, UserError>(&self.db, move |txn| {
            Box::pin(async move {
                debug!("looking for existing user");
                match repository::lookup_user_by_email(txn, &input.email).await {
                    Ok(_) => return Err(UserError::EmailTaken(input.email)),
                    Err(RepositoryError::NotFound) => {}
                    Err(e) => return Err(e.into()),
                }

                debug!("hashing password");
                let password = input.password;
                let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
                    .await
                    .map_err(|e| HashError(e.to_string()))??;

                debug!("creating user");
                let new_user = NewUser {
                    name: input.name,
                    email: input.email,
                    password_hash,
                };
                repository::insert_user(txn, new_user)
                    .await
                    .map_err(|e| insert_error(e, email))
            })
        })
        .await?;

        info!("user created");
        Ok(())
    }
}

/// A unique violation on insert means a concurrent registration won the race
fn insert_error(err: RepositoryError, email: String) -> UserError {
    match err {
        RepositoryError::UniqueViolation(_) => UserError::EmailTaken(email),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_unique_violation_on_insert_is_email_taken() {
        let err = insert_error(
            RepositoryError::UniqueViolation("users.email".to_string()),
            "a@x.com".to_string(),
        );
        assert!(matches!(err, UserError::EmailTaken(ref email) if email == "a@x.com"));
    }

    #[test]
    fn test_other_insert_failures_stay_repository_errors() {
        let err = insert_error(
            RepositoryError::Database(DbErr::Custom("disk full".to_string())),
            "a@x.com".to_string(),
        );
        assert!(matches!(err, UserError::Repository(RepositoryError::Database(_))));
    }
}
