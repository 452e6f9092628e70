//! Enum and model serialization tests for the entity crate
//! These tests avoid database round trips and only exercise the derived impls

use entity::{
    sea_orm_active_enums::{TaskPriority, TaskType},
    task_status,
    users,
};
use sea_orm::{ActiveEnum, Iterable};

/// Test TaskType display values
#[test]
fn test_task_type_values() {
    assert_eq!(format!("{}", TaskType::Task), "Task");
    assert_eq!(format!("{}", TaskType::Ticket), "Ticket");
}

/// Test TaskType values stored in the database
#[test]
fn test_task_type_db_values() {
    assert_eq!(TaskType::Task.to_value(), "Task");
    assert_eq!(TaskType::try_from_value(&"Ticket".to_string()).unwrap(), TaskType::Ticket);
    assert!(TaskType::try_from_value(&"Bug".to_string()).is_err());
}

/// Test TaskPriority display values
#[test]
fn test_task_priority_values() {
    assert_eq!(format!("{}", TaskPriority::Low), "Low");
    assert_eq!(format!("{}", TaskPriority::Medium), "Medium");
    assert_eq!(format!("{}", TaskPriority::High), "High");
}

/// Test TaskPriority covers exactly three levels
#[test]
fn test_task_priority_iter() {
    let all: Vec<TaskPriority> = TaskPriority::iter().collect();
    assert_eq!(all, vec![TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]);
}

/// Test enums deserialize from their JSON names
#[test]
fn test_enum_json_names() {
    let priority: TaskPriority = serde_json::from_str("\"High\"").unwrap();
    assert_eq!(priority, TaskPriority::High);

    let task_type: TaskType = serde_json::from_str("\"Ticket\"").unwrap();
    assert_eq!(task_type, TaskType::Ticket);

    assert!(serde_json::from_str::<TaskPriority>("\"Urgent\"").is_err());
}

/// Test the password hash never leaves the user model through serde
#[test]
fn test_user_model_hides_password() {
    let user = users::Model {
        id:         1,
        name:       "Ada".to_string(),
        email:      "ada@example.com".to_string(),
        password:   "$argon2id$secret".to_string(),
        created_at: chrono::Utc::now(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "ada@example.com");
}

/// Test the status type column is exposed as `type`
#[test]
fn test_task_status_type_field_name() {
    let status = task_status::Model {
        id:          1,
        status_type: "workflow".to_string(),
        status_name: "Open".to_string(),
        is_active:   true,
    };

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["type"], "workflow");
    assert_eq!(json["status_name"], "Open");
}
