//! Users Entity
//!
//! People who create, own, follow and comment on tasks. The `password` column
//! always holds an Argon2id hash and must never be serialized into a response.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i32,
    pub name:       String,
    #[sea_orm(unique)]
    pub email:      String,
    #[serde(skip_serializing)]
    pub password:   String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::task_cc_members::Entity")]
    CcMemberships,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comments.def() }
}

impl Related<super::task_cc_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::CcMemberships.def() }
}

impl ActiveModelBehavior for ActiveModel {}
