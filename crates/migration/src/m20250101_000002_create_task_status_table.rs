use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskStatus::Id))
                    .col(string_len(TaskStatus::Type, 20))
                    .col(string_len_uniq(TaskStatus::StatusName, 50))
                    .col(boolean(TaskStatus::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskStatus {
    Table,
    Id,
    Type,
    StatusName,
    IsActive,
}
