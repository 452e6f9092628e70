use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250101_000001_create_users_table::Users, m20250101_000003_create_tasks_table::Tasks};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskCcMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskCcMembers::Id))
                    .col(integer(TaskCcMembers::TaskId))
                    .col(integer(TaskCcMembers::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_cc_members_task_id")
                            .from(TaskCcMembers::Table, TaskCcMembers::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_cc_members_user_id")
                            .from(TaskCcMembers::Table, TaskCcMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user is CC'd at most once per task
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_cc_members_task_user_unique")
                    .table(TaskCcMembers::Table)
                    .col(TaskCcMembers::TaskId)
                    .col(TaskCcMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_cc_members_user_id")
                    .table(TaskCcMembers::Table)
                    .col(TaskCcMembers::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskCcMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskCcMembers {
    Table,
    Id,
    TaskId,
    UserId,
}
