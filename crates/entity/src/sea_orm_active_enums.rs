//! Active enums shared by the task entities.
//!
//! Values are stored as strings so the schema stays portable between PostgreSQL and SQLite.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of work item a task represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum TaskType {
    /// Planned piece of work
    #[sea_orm(string_value = "Task")]
    Task,
    /// Incoming request or incident
    #[sea_orm(string_value = "Ticket")]
    Ticket,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::Task => write!(f, "Task"),
            TaskType::Ticket => write!(f, "Ticket"),
        }
    }
}

/// Task priority
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum TaskPriority {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}
