use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::board_models::{AssignedUser, BoardResponse, BoardTask};
use crate::error::ApiError;
use crate::models::{project::Project, tag::Tag};

/// Row shape for the task fetch: the task joined with its assignee's
/// username, before tags are resolved.
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: Option<String>,
    column: String,
    position: i64,
    assigned_user_id: Option<i64>,
    username: Option<String>,
}

// Full board fetch. This is the one call the client makes when opening a
// project, so everything comes back at once: project, ordered tasks, tags
// and assignees.
pub async fn get_board(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner();
    info!("Received request for board of project: {}", code);

    let project =
        sqlx::query_as::<_, Project>("SELECT id, code, name FROM projects WHERE code = ?")
            .bind(&code)
            .fetch_optional(pool.get_ref())
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Project with code '{}' not found", code))
            })?;

    let task_rows = sqlx::query_as::<_, TaskRow>(
        "SELECT t.id, t.title, t.description, t.\"column\", t.position, t.assigned_user_id, u.username
         FROM tasks t
         LEFT JOIN users u ON t.assigned_user_id = u.id
         WHERE t.project_id = ?
         ORDER BY t.position",
    )
    .bind(project.id)
    .fetch_all(pool.get_ref())
    .await?;

    let mut tasks = Vec::with_capacity(task_rows.len());
    for row in task_rows {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT tg.id, tg.name, tg.color
             FROM tags tg
             JOIN task_tags tt ON tg.id = tt.tag_id
             WHERE tt.task_id = ?",
        )
        .bind(row.id)
        .fetch_all(pool.get_ref())
        .await?;

        let assigned_user = match (row.assigned_user_id, row.username) {
            (Some(id), Some(username)) => Some(AssignedUser { id, username }),
            _ => None,
        };

        tasks.push(BoardTask {
            id: row.id,
            title: row.title,
            description: row.description,
            column: row.column,
            position: row.position,
            tags,
            assigned_user,
        });
    }

    Ok(HttpResponse::Ok().json(BoardResponse { project, tasks }))
}
