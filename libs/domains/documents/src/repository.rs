//! Repository operations for `documents` and `logs`.

use database::RepositoryResult;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, EntityTrait};

use crate::entity::{audit_log, document};
use crate::models::{NewDocument, NewLog};

/// Insert a document and return its generated id
pub async fn insert_document(txn: &DatabaseTransaction, doc: NewDocument) -> RepositoryResult<i32> {
    let model = document::ActiveModel {
        name: Set(doc.name),
        description: Set(doc.description),
        user_id: Set(doc.user_id),
        reviewer_id: Set(doc.reviewer_id),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    let result = document::Entity::insert(model).exec(txn).await?;
    Ok(result.last_insert_id)
}

pub async fn insert_log(txn: &DatabaseTransaction, log: NewLog) -> RepositoryResult<()> {
    let model = audit_log::ActiveModel {
        action: Set(log.action.as_str().to_string()),
        document_id: Set(log.document_id),
        user_id: Set(log.user_id),
        description: Set(log.description),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    audit_log::Entity::insert(model).exec(txn).await?;
    Ok(())
}
