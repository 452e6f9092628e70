//! Entity definitions for Taskflow
//!
//! This crate contains Sea-ORM entity definitions for the task tracker tables.
//! Relations mirror the foreign keys created by the `migration` crate.

pub mod sea_orm_active_enums;
pub mod comments;
pub use comments::Entity as Comments;
pub mod task_cc_members;
pub use task_cc_members::Entity as TaskCcMembers;
pub mod task_status;
pub use task_status::Entity as TaskStatus;
pub mod tasks;
pub use tasks::Entity as Tasks;
pub mod users;
pub use users::Entity as Users;
