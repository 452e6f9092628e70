//! # Task Status Service Tests

mod common;

use common::{insert_status, insert_task, test_state};
use entity::TaskStatus;
use sea_orm::EntityTrait;
use server::{
    dto::task_statuses::{CreateTaskStatusRequest, TaskStatusListQuery, UpdateTaskStatusRequest},
    services::task_statuses::{
        create_task_status,
        delete_task_status,
        get_task_status,
        list_task_statuses,
        update_task_status,
    },
};

fn status_request(name: &str, status_type: &str) -> CreateTaskStatusRequest {
    CreateTaskStatusRequest {
        status_type: status_type.to_string(),
        status_name: name.to_string(),
        is_active:   None,
    }
}

#[tokio::test]
async fn test_seeded_statuses_listed_by_id() {
    let state = test_state().await;

    let page = list_task_statuses(&state, TaskStatusListQuery::default())
        .await
        .unwrap();
    let names: Vec<&str> = page.items.iter().map(|s| s.status_name.as_str()).collect();
    assert_eq!(names, vec!["To Do", "In Progress", "Done"]);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_create_status_defaults_active() {
    let state = test_state().await;

    let status = create_task_status(&state, status_request("Blocked", "Ticket"))
        .await
        .unwrap();
    assert!(status.is_active);
    assert_eq!(status.status_type, "Ticket");
    assert_eq!(get_task_status(&state, status.id).await.unwrap(), status);
}

#[tokio::test]
async fn test_create_status_duplicate_name() {
    let state = test_state().await;

    let err = create_task_status(&state, status_request("Done", "Task"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_STATUS_NAME");
    assert_eq!(err.message(), "Status with this name already exists");
}

#[tokio::test]
async fn test_create_status_validation() {
    let state = test_state().await;

    let err = create_task_status(&state, status_request(&"x".repeat(51), ""))
        .await
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Validation failed: Status name cannot exceed 50 characters, Type is required and cannot be empty"
    );
}

#[tokio::test]
async fn test_list_statuses_by_type() {
    let state = test_state().await;
    insert_status(&state, "Triage").await;
    insert_status(&state, "Escalated").await;

    let tickets = list_task_statuses(&state, TaskStatusListQuery {
        status_type: Some("Ticket".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(tickets.pagination.total_items, 2);
    assert!(tickets.items.iter().all(|s| s.status_type == "Ticket"));
}

#[tokio::test]
async fn test_update_status_uniqueness_excludes_self() {
    let state = test_state().await;

    let same = update_task_status(&state, 2, UpdateTaskStatusRequest {
        status_name: Some("In Progress".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(same.status_name, "In Progress");

    let err = update_task_status(&state, 2, UpdateTaskStatusRequest {
        status_name: Some("Done".to_string()),
        ..Default::default()
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_STATUS_NAME");

    let deactivated = update_task_status(&state, 2, UpdateTaskStatusRequest {
        is_active: Some(false),
        ..Default::default()
    })
    .await
    .unwrap();
    assert!(!deactivated.is_active);
}

#[tokio::test]
async fn test_missing_status() {
    let state = test_state().await;

    let err = get_task_status(&state, 99).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "Task status not found");
    assert_eq!(
        update_task_status(&state, 99, UpdateTaskStatusRequest::default())
            .await
            .unwrap_err()
            .code(),
        "NOT_FOUND"
    );
}

#[tokio::test]
async fn test_delete_status_blocked_while_in_use() {
    let state = test_state().await;
    insert_task(&state, "Uses To Do", 1, None, None).await;
    insert_task(&state, "Also To Do", 1, None, None).await;

    let err = delete_task_status(&state, 1).await.unwrap_err();
    assert_eq!(err.code(), "HAS_DEPENDENTS");
    assert_eq!(err.message(), "Cannot delete status that is being used by 2 tasks");

    let message = delete_task_status(&state, 3).await.unwrap();
    assert_eq!(message.message, "Task status deleted successfully");
    assert!(TaskStatus::find_by_id(3).one(&state.db).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_statuses_page_beyond_range() {
    let state = test_state().await;

    let page = list_task_statuses(&state, TaskStatusListQuery {
        page: Some(3),
        limit: Some(2),
        ..Default::default()
    })
    .await
    .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.current_page, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.items_per_page, 2);
}
