use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250101_000001_create_users_table::Users, m20250101_000002_create_task_status_table::TaskStatus};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table also builds on SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tasks::Id))
                    .col(string_len(Tasks::Type, 10))
                    .col(string_len(Tasks::Title, 255))
                    .col(string_len_null(Tasks::Description, 500))
                    .col(string_len(Tasks::Priority, 10))
                    .col(integer(Tasks::Status).default(1))
                    .col(integer_null(Tasks::AssigneeId))
                    .col(date_null(Tasks::DueDate))
                    .col(boolean(Tasks::IsRead).default(false))
                    .col(integer_null(Tasks::CreatedBy))
                    .col(timestamp_with_time_zone(Tasks::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Tasks::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_status")
                            .from(Tasks::Table, Tasks::Status)
                            .to(TaskStatus::Table, TaskStatus::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_assignee_id")
                            .from(Tasks::Table, Tasks::AssigneeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_created_by")
                            .from(Tasks::Table, Tasks::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_tasks_status", Tasks::Status),
            ("idx_tasks_assignee_id", Tasks::AssigneeId),
            ("idx_tasks_created_by", Tasks::CreatedBy),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Tasks::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tasks {
    Table,
    Id,
    Type,
    Title,
    Description,
    Priority,
    Status,
    AssigneeId,
    DueDate,
    IsRead,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
