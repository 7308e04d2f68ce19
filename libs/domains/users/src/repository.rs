//! Repository operations for `users`.
//!
//! Each function runs exactly one statement on the caller's transaction.

use database::{RepositoryError, RepositoryResult};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter};

use crate::entity::{self, Entity as Users};
use crate::models::{NewUser, User};

pub async fn lookup_user_by_email(txn: &DatabaseTransaction, email: &str) -> RepositoryResult<User> {
    Users::find()
        .filter(entity::Column::Email.eq(email))
        .one(txn)
        .await?
        .map(User::from)
        .ok_or(RepositoryError::NotFound)
}

pub async fn lookup_user_by_id(txn: &DatabaseTransaction, id: i32) -> RepositoryResult<User> {
    Users::find_by_id(id)
        .one(txn)
        .await?
        .map(User::from)
        .ok_or(RepositoryError::NotFound)
}

/// Fails with `UniqueViolation` if the email is already taken
pub async fn insert_user(txn: &DatabaseTransaction, user: NewUser) -> RepositoryResult<()> {
    let model = entity::ActiveModel {
        name: Set(user.name),
        email: Set(user.email),
        password: Set(user.password_hash),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    Users::insert(model).exec(txn).await?;
    Ok(())
}
