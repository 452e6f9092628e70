//! # Task Service
//!
//! Task CRUD, filtered listing and loading of the full task graph: assignee,
//! creator, status, comments and CC members.

use std::collections::HashMap;

use chrono::Utc;
use entity::{
    Comments,
    TaskCcMembers,
    TaskStatus,
    Tasks,
    Users,
    comments,
    task_cc_members,
    tasks::{self, AssigneeLink, CreatorLink},
    users,
};
use error::{AppError, MessageResponse, Paginated, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    ModelTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::{
    AppState,
    dto::{
        UserSummary,
        cc_members::CcMemberResponse,
        comments::CommentResponse,
        tasks::{CreateTaskRequest, TaskDetailResponse, TaskListItem, TaskListQuery, UpdateTaskRequest},
    },
    services::fetch_page,
    validation::ValidateRequest,
};

/// Status assigned to tasks created without one
pub const DEFAULT_STATUS_ID: i32 = 1;

/// Load a task or fail with `Task not found`
pub(crate) async fn find_task<C: ConnectionTrait>(db: &C, task_id: i32) -> Result<tasks::Model> {
    Tasks::find_by_id(task_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Task not found"))
}

/// Foreign keys supplied by a create or update request
#[derive(Debug, Default, Clone, Copy)]
struct References {
    status:     Option<i32>,
    assignee:   Option<i32>,
    created_by: Option<i32>,
}

impl References {
    /// Every supplied reference must resolve; all misses are reported together.
    async fn ensure_exist<C: ConnectionTrait>(self, db: &C) -> Result<()> {
        let mut missing = Vec::new();

        if let Some(id) = self.status {
            if TaskStatus::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("Task status {} does not exist", id));
            }
        }
        if let Some(id) = self.assignee {
            if Users::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("Assignee {} does not exist", id));
            }
        }
        if let Some(id) = self.created_by {
            if Users::find_by_id(id).one(db).await?.is_none() {
                missing.push(format!("Creator {} does not exist", id));
            }
        }

        if missing.is_empty() {
            Ok(())
        }
        else {
            Err(AppError::validation(format!(
                "Validation failed: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Load assignee, creator, status, comments (newest first) and CC members of `task`
pub(crate) async fn load_task_graph<C: ConnectionTrait>(db: &C, task: tasks::Model) -> Result<TaskDetailResponse> {
    let assignee = task.find_linked(AssigneeLink).one(db).await?;
    let creator = task.find_linked(CreatorLink).one(db).await?;
    let task_status = task.find_related(TaskStatus).one(db).await?;

    let comments = Comments::find()
        .filter(comments::Column::TaskId.eq(task.id))
        .order_by_desc(comments::Column::CreatedAt)
        .order_by_desc(comments::Column::Id)
        .find_also_related(Users)
        .all(db)
        .await?;
    let cc_members = TaskCcMembers::find()
        .filter(task_cc_members::Column::TaskId.eq(task.id))
        .order_by_asc(task_cc_members::Column::Id)
        .find_also_related(Users)
        .all(db)
        .await?;

    Ok(TaskDetailResponse {
        task,
        assignee: assignee.map(UserSummary::from),
        creator: creator.map(UserSummary::from),
        task_status,
        comments: comments
            .into_iter()
            .map(|(comment, user)| {
                CommentResponse {
                    comment,
                    user: user.map(UserSummary::from),
                }
            })
            .collect(),
        cc_members: cc_members
            .into_iter()
            .map(|(member, user)| {
                CcMemberResponse {
                    member,
                    user: user.map(UserSummary::from),
                }
            })
            .collect(),
    })
}

/// Create a task and return its full graph
pub async fn create_task(state: &AppState, req: CreateTaskRequest) -> Result<TaskDetailResponse> {
    req.check()?;

    let status = req.status.unwrap_or(DEFAULT_STATUS_ID);
    let txn = state.db.begin().await?;
    References {
        status:     Some(status),
        assignee:   req.assignee_id,
        created_by: req.created_by,
    }
    .ensure_exist(&txn)
    .await?;

    let now = Utc::now();
    let task = tasks::ActiveModel {
        task_type: Set(req.task_type),
        title: Set(req.title.trim().to_string()),
        description: Set(req.description),
        priority: Set(req.priority),
        status: Set(status),
        assignee_id: Set(req.assignee_id),
        due_date: Set(req.due_date),
        is_read: Set(req.is_read.unwrap_or(false)),
        created_by: Set(req.created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let detail = load_task_graph(&txn, task).await?;
    txn.commit().await?;

    info!(task_id = %detail.task.id, status, "Task created");
    Ok(detail)
}

/// List tasks by id with optional status, priority, type and assignee filters
pub async fn list_tasks(state: &AppState, query: TaskListQuery) -> Result<Paginated<TaskListItem>> {
    let mut select = Tasks::find();
    if let Some(status) = query.status {
        select = select.filter(tasks::Column::Status.eq(status));
    }
    if let Some(priority) = query.priority {
        select = select.filter(tasks::Column::Priority.eq(priority));
    }
    if let Some(task_type) = query.task_type {
        select = select.filter(tasks::Column::TaskType.eq(task_type));
    }
    if let Some(assignee_id) = query.assignee_id {
        select = select.filter(tasks::Column::AssigneeId.eq(assignee_id));
    }

    let (tasks, pagination) = fetch_page(
        select.order_by_asc(tasks::Column::Id),
        &state.db,
        query.page_request(),
    )
    .await?;

    let task_ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    let assignee_ids: Vec<i32> = tasks.iter().filter_map(|t| t.assignee_id).collect();

    let mut assignees: HashMap<i32, UserSummary> = HashMap::new();
    if !assignee_ids.is_empty() {
        for user in Users::find()
            .filter(users::Column::Id.is_in(assignee_ids))
            .all(&state.db)
            .await?
        {
            assignees.insert(user.id, user.into());
        }
    }

    let mut cc_member_ids: HashMap<i32, Vec<i32>> = HashMap::new();
    let mut comment_ids: HashMap<i32, Vec<i32>> = HashMap::new();
    if !task_ids.is_empty() {
        for member in TaskCcMembers::find()
            .filter(task_cc_members::Column::TaskId.is_in(task_ids.clone()))
            .order_by_asc(task_cc_members::Column::Id)
            .all(&state.db)
            .await?
        {
            cc_member_ids
                .entry(member.task_id)
                .or_default()
                .push(member.user_id);
        }
        for comment in Comments::find()
            .filter(comments::Column::TaskId.is_in(task_ids))
            .order_by_asc(comments::Column::Id)
            .all(&state.db)
            .await?
        {
            comment_ids
                .entry(comment.task_id)
                .or_default()
                .push(comment.id);
        }
    }

    let items = tasks
        .into_iter()
        .map(|task| {
            TaskListItem {
                assignee:      task.assignee_id.and_then(|id| assignees.get(&id).cloned()),
                cc_member_ids: cc_member_ids.remove(&task.id).unwrap_or_default(),
                comment_ids:   comment_ids.remove(&task.id).unwrap_or_default(),
                task,
            }
        })
        .collect();

    Ok(Paginated::new(items, pagination))
}

/// Get a task with its full graph
pub async fn get_task(state: &AppState, task_id: i32) -> Result<TaskDetailResponse> {
    let task = find_task(&state.db, task_id).await?;
    load_task_graph(&state.db, task).await
}

/// Get the full task graph; the details route shares the task lookup
pub async fn get_task_details(state: &AppState, task_id: i32) -> Result<TaskDetailResponse> {
    debug!(task_id, "Loading task details");
    get_task(state, task_id).await
}

/// Update the supplied fields of a task and return the refreshed graph
pub async fn update_task(state: &AppState, task_id: i32, req: UpdateTaskRequest) -> Result<TaskDetailResponse> {
    req.check()?;

    let txn = state.db.begin().await?;
    let mut active: tasks::ActiveModel = find_task(&txn, task_id).await?.into();

    References {
        status:     req.status,
        assignee:   req.assignee_id.flatten(),
        created_by: req.created_by.flatten(),
    }
    .ensure_exist(&txn)
    .await?;

    if let Some(task_type) = req.task_type {
        active.task_type = Set(task_type);
    }
    if let Some(title) = req.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(priority) = req.priority {
        active.priority = Set(priority);
    }
    if let Some(status) = req.status {
        active.status = Set(status);
    }
    if let Some(assignee_id) = req.assignee_id {
        active.assignee_id = Set(assignee_id);
    }
    if let Some(due_date) = req.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(is_read) = req.is_read {
        active.is_read = Set(is_read);
    }
    if let Some(created_by) = req.created_by {
        active.created_by = Set(created_by);
    }
    active.updated_at = Set(Utc::now());

    let task = active.update(&txn).await?;
    let detail = load_task_graph(&txn, task).await?;
    txn.commit().await?;

    info!(task_id, "Task updated");
    Ok(detail)
}

/// Delete a task together with its comments and CC members
pub async fn delete_task(state: &AppState, task_id: i32) -> Result<MessageResponse> {
    let txn = state.db.begin().await?;
    find_task(&txn, task_id).await?;

    let comments = Comments::delete_many()
        .filter(comments::Column::TaskId.eq(task_id))
        .exec(&txn)
        .await?;
    let members = TaskCcMembers::delete_many()
        .filter(task_cc_members::Column::TaskId.eq(task_id))
        .exec(&txn)
        .await?;
    Tasks::delete_by_id(task_id).exec(&txn).await?;
    txn.commit().await?;

    info!(
        task_id,
        comments = comments.rows_affected,
        cc_members = members.rows_affected,
        "Task deleted"
    );
    Ok(MessageResponse::new("Task deleted successfully"))
}
