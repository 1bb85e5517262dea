use actix_web::{web, HttpResponse};
use log::info;
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;

use super::task_models::{AttachTagRequest, CreateTaskRequest, TaskAckResponse, UpdateTaskRequest};
use crate::error::ApiError;
use crate::models::task::Task;

// Handler to create a task at the end of its column
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let title = match request.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(ApiError::Validation("Field 'title' is required".into())),
    };
    let column = match request.column.as_deref().map(str::trim) {
        Some(column) if !column.is_empty() => column.to_string(),
        _ => return Err(ApiError::Validation("Field 'column' is required".into())),
    };
    let project_id = request
        .project_id
        .ok_or_else(|| ApiError::Validation("Field 'project_id' is required".into()))?;
    let description = request.description.clone().unwrap_or_default();

    info!(
        "Received request to create task '{}' in project {} column '{}'",
        title, project_id, column
    );

    // Count and insert must see the same state. The write transaction holds
    // the database lock across both, so two concurrent creates in one column
    // cannot compute the same position.
    let mut tx = pool.begin().await?;

    let position: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = ? AND \"column\" = ?")
            .bind(project_id)
            .bind(&column)
            .fetch_one(&mut *tx)
            .await?;

    let insert = sqlx::query(
        "INSERT INTO tasks (project_id, assigned_user_id, title, description, \"column\", position)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(request.assigned_user_id)
    .bind(&title)
    .bind(&description)
    .bind(&column)
    .bind(position)
    .execute(&mut *tx)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db_err)
            if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) =>
        {
            ApiError::Validation("Unknown project_id or assigned_user_id".into())
        }
        _ => ApiError::from(err),
    })?;

    let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
        .bind(insert.last_insert_rowid())
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    info!("Task {} created at position {}", task.id, task.position);
    Ok(HttpResponse::Created().json(task))
}

// Handler to apply a partial update to a task
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    info!("Received request to update task {}", task_id);

    if request.is_empty() {
        return Err(ApiError::Validation("Nothing to update".into()));
    }
    if let Some(title) = request.title.as_deref() {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Field 'title' must not be empty".into()));
        }
    }
    if let Some(column) = request.column.as_deref() {
        if column.trim().is_empty() {
            return Err(ApiError::Validation(
                "Field 'column' must not be empty".into(),
            ));
        }
    }
    if let Some(position) = request.position {
        if position < 0 {
            return Err(ApiError::Validation(
                "Field 'position' must be non-negative".into(),
            ));
        }
    }

    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM tasks WHERE id = ?")
        .bind(task_id)
        .fetch_optional(pool.get_ref())
        .await?;
    if exists.is_none() {
        return Err(ApiError::NotFound(format!("Task {} not found", task_id)));
    }

    // Only the supplied slots end up in the statement; one UPDATE keeps the
    // change atomic.
    let mut builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE tasks SET ");
    {
        let mut fields = builder.separated(", ");
        if let Some(title) = &request.title {
            fields.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &request.description {
            fields
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(column) = &request.column {
            fields
                .push("\"column\" = ")
                .push_bind_unseparated(column.clone());
        }
        if let Some(position) = request.position {
            fields.push("position = ").push_bind_unseparated(position);
        }
        if let Some(assigned_user_id) = request.assigned_user_id {
            fields
                .push("assigned_user_id = ")
                .push_bind_unseparated(assigned_user_id);
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(task_id);

    builder.build().execute(pool.get_ref()).await?;

    let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
        .bind(task_id)
        .fetch_one(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

// Handler to delete a task (its tag links go with it)
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    info!("Received request to delete task {}", task_id);

    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Task {} not found", task_id)));
    }

    Ok(HttpResponse::Ok().json(TaskAckResponse {
        success: true,
        message: format!("Task {} deleted", task_id),
    }))
}

// Handler to attach a tag to a task. A duplicate pair and a dangling id both
// trip a constraint, and the caller gets one uniform validation answer.
pub async fn attach_tag(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<AttachTagRequest>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    let tag_id = request
        .tag_id
        .ok_or_else(|| ApiError::Validation("Field 'tag_id' is required".into()))?;

    info!("Received request to attach tag {} to task {}", tag_id, task_id);

    let result = sqlx::query("INSERT INTO task_tags (task_id, tag_id) VALUES (?, ?)")
        .bind(task_id)
        .bind(tag_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Created().json(TaskAckResponse {
            success: true,
            message: format!("Tag {} attached to task {}", tag_id, task_id),
        })),
        Err(sqlx::Error::Database(db_err))
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation
            ) =>
        {
            Err(ApiError::Validation(
                "Tag already assigned or invalid task/tag ids".into(),
            ))
        }
        Err(err) => Err(err.into()),
    }
}

// Handler to detach a tag from a task. The delete itself tells us whether
// the pair existed, so no existence read up front.
pub async fn detach_tag(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    let (task_id, tag_id) = path.into_inner();
    info!(
        "Received request to detach tag {} from task {}",
        tag_id, task_id
    );

    let result = sqlx::query("DELETE FROM task_tags WHERE task_id = ? AND tag_id = ?")
        .bind(task_id)
        .bind(tag_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Task {} has no tag {}",
            task_id, tag_id
        )));
    }

    Ok(HttpResponse::Ok().json(TaskAckResponse {
        success: true,
        message: format!("Tag {} detached from task {}", tag_id, task_id),
    }))
}
