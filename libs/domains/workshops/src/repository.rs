use database::RepositoryResult;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, EntityTrait};

use crate::entity::{self, Entity as Workshops};
use crate::models::NewWorkshop;

pub async fn insert_workshop(txn: &DatabaseTransaction, workshop: NewWorkshop) -> RepositoryResult<()> {
    let model = entity::ActiveModel {
        name: Set(workshop.name),
        description: Set(workshop.description),
        date: Set(workshop.date),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    Workshops::insert(model).exec(txn).await?;
    Ok(())
}
