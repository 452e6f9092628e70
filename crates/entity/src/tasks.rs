//! Tasks Entity
//!
//! Work items with an assignee, a creator and a workflow status. Comments and
//! CC members hang off a task and are removed together with it.
//!
//! Both `assignee_id` and `created_by` point at `users`, so the user side is
//! reached through [`AssigneeLink`] and [`CreatorLink`] rather than `Related`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{TaskPriority, TaskType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:          i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub task_type:   TaskType,
    pub title:       String,
    pub description: Option<String>,
    pub priority:    TaskPriority,
    pub status:      i32,
    pub assignee_id: Option<i32>,
    pub due_date:    Option<Date>,
    pub is_read:     bool,
    pub created_by:  Option<i32>,
    pub created_at:  DateTimeUtc,
    pub updated_at:  DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task_status::Entity",
        from = "Column::Status",
        to = "super::task_status::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Status,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssigneeId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Creator,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::task_cc_members::Entity")]
    CcMembers,
}

impl Related<super::task_status::Entity> for Entity {
    fn to() -> RelationDef { Relation::Status.def() }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comments.def() }
}

impl Related<super::task_cc_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::CcMembers.def() }
}

/// Task to the user it is assigned to.
#[derive(Debug)]
pub struct AssigneeLink;

impl Linked for AssigneeLink {
    type FromEntity = Entity;
    type ToEntity = super::users::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![Relation::Assignee.def()] }
}

/// Task to the user who created it.
#[derive(Debug)]
pub struct CreatorLink;

impl Linked for CreatorLink {
    type FromEntity = Entity;
    type ToEntity = super::users::Entity;

    fn link(&self) -> Vec<RelationDef> { vec![Relation::Creator.def()] }
}

impl ActiveModelBehavior for ActiveModel {}
