//! # User Service Tests
//!
//! Creation, normalization, search, partial updates and guarded deletion.

mod common;

use auth::secrecy::SecretString;
use common::{create_user, insert_cc_member, insert_comment, insert_task, test_state, user_request};
use entity::{TaskCcMembers, Users};
use sea_orm::EntityTrait;
use server::{
    dto::users::{UpdateUserRequest, UserListQuery},
    services::users::{create_user as create, delete_user, get_user, list_users, update_user},
};

#[tokio::test]
async fn test_create_user_normalizes_email_and_hashes_password() {
    let state = test_state().await;

    let user = create(&state, user_request("  Ada Lovelace ", "  Ada@Example.COM "))
        .await
        .unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");

    let stored = Users::find_by_id(user.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password, common::TEST_PASSWORD);
    assert!(auth::verify_password(&SecretString::from(common::TEST_PASSWORD), &stored.password).is_ok());
}

#[tokio::test]
async fn test_create_user_duplicate_email_any_case() {
    let state = test_state().await;
    create_user(&state, "Ada", "ada@example.com").await;

    let err = create(&state, user_request("Other Ada", " ADA@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_EMAIL");
    assert_eq!(err.message(), "User with this email already exists");
}

#[tokio::test]
async fn test_create_user_reports_each_invalid_field() {
    let state = test_state().await;

    let mut req = user_request("", "not-an-email");
    req.password = "short".to_string();
    let err = create(&state, req).await.unwrap_err();

    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(
        err.message(),
        "Validation failed: Name is required and cannot be empty, Invalid email format, Password must be at least 8 \
         characters long and contain at least one uppercase letter, one lowercase letter, and one number"
    );
}

#[tokio::test]
async fn test_response_never_contains_password() {
    let state = test_state().await;
    let user = create_user(&state, "Ada", "ada@example.com").await;

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());

    let detail = serde_json::to_value(get_user(&state, user.id).await.unwrap()).unwrap();
    assert!(detail.get("password").is_none());
    assert_eq!(detail["email"], "ada@example.com");
}

#[tokio::test]
async fn test_list_users_search_and_order() {
    let state = test_state().await;
    let ada = create_user(&state, "Ada Lovelace", "ada@example.com").await;
    let grace = create_user(&state, "Grace Hopper", "grace@navy.mil").await;
    create_user(&state, "Alan Turing", "alan@example.com").await;

    let all = list_users(&state, UserListQuery::default()).await.unwrap();
    assert_eq!(all.pagination.total_items, 3);
    assert_eq!(all.items.first().map(|u| u.name.as_str()), Some("Alan Turing"));

    let by_name = list_users(&state, UserListQuery {
        search: Some("HOPPER".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(by_name.items.len(), 1);
    assert_eq!(by_name.items[0].id, grace.id);

    let by_email = list_users(&state, UserListQuery {
        search: Some("ada@".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(by_email.items.len(), 1);
    assert_eq!(by_email.items[0].id, ada.id);

    // Wildcards are matched literally
    let wildcard = list_users(&state, UserListQuery {
        search: Some("%".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert!(wildcard.items.is_empty());
}

#[tokio::test]
async fn test_list_users_page_beyond_range() {
    let state = test_state().await;
    for i in 0 .. 5 {
        create_user(&state, &format!("User {i}"), &format!("user{i}@example.com")).await;
    }

    let page = list_users(&state, UserListQuery {
        page: Some(4),
        limit: Some(2),
        ..Default::default()
    })
    .await
    .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.current_page, 4);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.pagination.total_items, 5);
    assert_eq!(page.pagination.items_per_page, 2);
}

#[tokio::test]
async fn test_list_users_huge_page_is_empty() {
    let state = test_state().await;
    create_user(&state, "Ada", "ada@example.com").await;

    let page = list_users(&state, UserListQuery {
        page: Some(u64::MAX / 2),
        limit: Some(100),
        ..Default::default()
    })
    .await
    .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.current_page, u64::MAX / 2);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.total_items, 1);
}

#[tokio::test]
async fn test_get_user_includes_task_summaries() {
    let state = test_state().await;
    let ada = create_user(&state, "Ada", "ada@example.com").await;
    let grace = create_user(&state, "Grace", "grace@example.com").await;

    insert_task(&state, "Assigned to Ada", 1, Some(ada.id), Some(grace.id)).await;
    insert_task(&state, "Created by Ada", 2, None, Some(ada.id)).await;

    let detail = get_user(&state, ada.id).await.unwrap();
    assert_eq!(detail.assigned_tasks.len(), 1);
    assert_eq!(detail.assigned_tasks[0].title, "Assigned to Ada");
    assert_eq!(detail.created_tasks.len(), 1);
    assert_eq!(detail.created_tasks[0].status, 2);

    let err = get_user(&state, 999).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "User not found");
}

#[tokio::test]
async fn test_update_user_validates_only_supplied_fields() {
    let state = test_state().await;
    let user = create_user(&state, "Ada", "ada@example.com").await;

    let updated = update_user(&state, user.id, UpdateUserRequest {
        name: Some("Countess Ada".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(updated.name, "Countess Ada");
    assert_eq!(updated.email, "ada@example.com");

    let err = update_user(&state, user.id, UpdateUserRequest {
        name: Some(" ".to_string()),
        email: Some("bad".to_string()),
        password: None,
    })
    .await
    .unwrap_err();
    assert_eq!(
        err.message(),
        "Validation failed: Name is required and cannot be empty, Invalid email format"
    );
}

#[tokio::test]
async fn test_update_user_email_collision() {
    let state = test_state().await;
    let ada = create_user(&state, "Ada", "ada@example.com").await;
    create_user(&state, "Grace", "grace@example.com").await;

    let err = update_user(&state, ada.id, UpdateUserRequest {
        email: Some("Grace@Example.com".to_string()),
        ..Default::default()
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_EMAIL");

    // Re-submitting the user's own email is not a collision
    let same = update_user(&state, ada.id, UpdateUserRequest {
        email: Some("ADA@example.com".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(same.email, "ada@example.com");
}

#[tokio::test]
async fn test_update_user_password_is_rehashed() {
    let state = test_state().await;
    let user = create_user(&state, "Ada", "ada@example.com").await;

    update_user(&state, user.id, UpdateUserRequest {
        password: Some("NewSecret456".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();

    let stored = Users::find_by_id(user.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert!(auth::verify_password(&SecretString::from("NewSecret456"), &stored.password).is_ok());
}

#[tokio::test]
async fn test_update_missing_user() {
    let state = test_state().await;
    let err = update_user(&state, 42, UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user_without_dependents() {
    let state = test_state().await;
    let user = create_user(&state, "Ada", "ada@example.com").await;
    let creator = create_user(&state, "Grace", "grace@example.com").await;
    let task = insert_task(&state, "Watched", 1, None, Some(creator.id)).await;
    insert_cc_member(&state, task.id, user.id).await;

    let message = delete_user(&state, user.id).await.unwrap();
    assert_eq!(message.message, "User deleted successfully");

    assert!(Users::find_by_id(user.id).one(&state.db).await.unwrap().is_none());
    assert!(TaskCcMembers::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_user_with_dependents_cites_counts() {
    let state = test_state().await;
    let ada = create_user(&state, "Ada", "ada@example.com").await;

    let task = insert_task(&state, "One", 1, Some(ada.id), Some(ada.id)).await;
    insert_task(&state, "Two", 1, Some(ada.id), None).await;
    insert_comment(&state, task.id, Some(ada.id), "first").await;

    let err = delete_user(&state, ada.id).await.unwrap_err();
    assert_eq!(err.code(), "HAS_DEPENDENTS");
    assert_eq!(
        err.message(),
        "Cannot delete user with 2 assigned tasks, 1 created tasks, and 1 comments"
    );
    assert!(Users::find_by_id(ada.id).one(&state.db).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_missing_user() {
    let state = test_state().await;
    assert_eq!(delete_user(&state, 7).await.unwrap_err().code(), "NOT_FOUND");
}
