use database::{RepositoryError, run_in_transaction};
use domain_users::repository::lookup_user_by_id;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::{debug, info};
use validator::Validate;

use crate::error::{DocumentError, DocumentResult, UserRole};
use crate::models::{CreateDocument, NewDocument, NewLog};
use crate::repository;

pub struct DocumentService {
    db: DatabaseConnection,
}

impl DocumentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a document together with its `create` audit entry.
    ///
    /// Owner and reviewer must exist. The audit entry is attributed to the
    /// reviewer. Either both rows are written or neither is.
    ///
    /// Returns the new document's id.
    pub async fn create_document(&self, input: CreateDocument) -> DocumentResult<i32> {
        debug!("validating body");
        input.validate()?;

        let document_id = run_in_transaction::<_, _, DocumentError>(&self.db, move |txn| {
            Box::pin(async move {
                debug!(user_id = input.user_id, "looking for owner");
                ensure_user_exists(txn, UserRole::Owner, input.user_id).await?;

                debug!(reviewer_id = input.reviewer_id, "looking for reviewer");
                ensure_user_exists(txn, UserRole::Reviewer, input.reviewer_id).await?;

                let reviewer_id = input.reviewer_id;
                let name = input.name.clone();

                debug!("creating document");
                let document_id =
                    repository::insert_document(txn, NewDocument::from(input)).await?;

                debug!(document_id, "creating log");
                repository::insert_log(
                    txn,
                    NewLog::document_created(document_id, reviewer_id, &name),
                )
                .await?;

                Ok(document_id)
            })
        })
        .await?;

        info!(document_id, "document created");
        Ok(document_id)
    }
}

async fn ensure_user_exists(
    txn: &DatabaseTransaction,
    role: UserRole,
    id: i32,
) -> DocumentResult<()> {
    match lookup_user_by_id(txn, id).await {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(DocumentError::UserNotFound { role, id }),
        Err(e) => Err(e.into()),
    }
}
