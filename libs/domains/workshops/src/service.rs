use database::run_in_transaction;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};
use validator::Validate;

use crate::error::{WorkshopError, WorkshopResult};
use crate::models::{CreateWorkshop, NewWorkshop};
use crate::repository;

pub struct WorkshopService {
    db: DatabaseConnection,
}

impl WorkshopService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_workshop(&self, input: CreateWorkshop) -> WorkshopResult<()> {
        debug!("validating body");
        input.validate()?;

        run_in_transaction::<_, _, WorkshopError>(&self.db, move |txn| {
            Box::pin(async move {
                debug!("creating workshop");
                repository::insert_workshop(txn, NewWorkshop::from(input)).await?;
                Ok(())
            })
        })
        .await?;

        info!("workshop created");
        Ok(())
    }
}
