//! Task Status Entity
//!
//! Named, typed workflow states. Tasks reference a status by foreign key, and a
//! status cannot be removed while any task still points at it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "task_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:          i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub status_type: String,
    #[sea_orm(unique)]
    pub status_name: String,
    pub is_active:   bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tasks::Entity")]
    Tasks,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tasks.def() }
}

impl ActiveModelBehavior for ActiveModel {}
