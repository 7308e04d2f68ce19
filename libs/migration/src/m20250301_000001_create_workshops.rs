use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workshops::Table)
                    .if_not_exists()
                    .col(pk_auto(Workshops::Id))
                    .col(string(Workshops::Name))
                    .col(text_null(Workshops::Description))
                    .col(date(Workshops::Date))
                    .col(
                        timestamp_with_time_zone(Workshops::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workshops_date")
                    .table(Workshops::Table)
                    .col(Workshops::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workshops::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workshops {
    Table,
    Id,
    Name,
    Description,
    Date,
    CreatedAt,
}
