use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Duration, Utc};
use log::info;
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::admin_auth::{require_admin, SESSION_COOKIE};
use super::admin_models::{
    AdminAckResponse, CreateProjectRequest, CreateTagRequest, CreateUserRequest,
    DashboardResponse, LoginRequest,
};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{project::Project, tag::Tag, user::User};

// Admin sessions last a working day
const SESSION_HOURS: i64 = 8;

// The gate is a plain equality check against the configured secret; what
// matters is that every mutation below goes through require_admin.
pub async fn login(
    pool: web::Data<SqlitePool>,
    config: web::Data<AppConfig>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Received admin login request");

    if request.password != config.admin_secret {
        info!("Admin login rejected: wrong password");
        return Err(ApiError::Unauthorized("Wrong password".into()));
    }

    let session_id = Uuid::new_v4().to_string();
    let expires_at = Utc::now() + Duration::hours(SESSION_HOURS);

    sqlx::query("INSERT INTO admin_sessions (session_id, expires_at) VALUES (?, ?)")
        .bind(&session_id)
        .bind(expires_at)
        .execute(pool.get_ref())
        .await?;

    info!("Admin login successful");
    Ok(HttpResponse::Ok()
        .cookie(
            actix_web::cookie::Cookie::build(SESSION_COOKIE, session_id)
                .http_only(true)
                .finish(),
        )
        .json(AdminAckResponse {
            success: true,
            message: "Login successful".into(),
        }))
}

pub async fn logout(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let context = require_admin(pool.get_ref(), &req).await?;

    sqlx::query("DELETE FROM admin_sessions WHERE session_id = ?")
        .bind(&context.session_id)
        .execute(pool.get_ref())
        .await?;

    info!("Admin logged out");
    Ok(HttpResponse::Ok().json(AdminAckResponse {
        success: true,
        message: "Logout successful".into(),
    }))
}

pub async fn dashboard(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let projects =
        sqlx::query_as::<_, Project>("SELECT id, code, name FROM projects ORDER BY name ASC")
            .fetch_all(pool.get_ref())
            .await?;
    let users =
        sqlx::query_as::<_, User>("SELECT id, username, full_name FROM users ORDER BY username ASC")
            .fetch_all(pool.get_ref())
            .await?;
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tags ORDER BY name ASC")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        projects,
        users,
        tags,
    }))
}

// Handler to create a project
pub async fn create_project(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let code = match request.code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => return Err(ApiError::Validation("Field 'code' is required".into())),
    };
    let name = match request.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(ApiError::Validation("Field 'name' is required".into())),
    };

    info!("Received request to create project '{}' ({})", name, code);

    let insert = sqlx::query("INSERT INTO projects (code, name) VALUES (?, ?)")
        .bind(&code)
        .bind(&name)
        .execute(pool.get_ref())
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation) => {
                ApiError::Validation(format!("Project code '{}' already exists", code))
            }
            _ => ApiError::from(err),
        })?;

    let project = sqlx::query_as::<_, Project>("SELECT id, code, name FROM projects WHERE id = ?")
        .bind(insert.last_insert_rowid())
        .fetch_one(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(project))
}

// Handler to delete a project. The schema cascades the delete to the
// project's tasks and their tag links.
pub async fn delete_project(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let project_id = path.into_inner();
    info!("Received request to delete project {}", project_id);

    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(project_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Project {} not found",
            project_id
        )));
    }

    Ok(HttpResponse::Ok().json(AdminAckResponse {
        success: true,
        message: format!("Project {} deleted", project_id),
    }))
}

// Handler to create a user
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let username = match request.username.as_deref().map(str::trim) {
        Some(username) if !username.is_empty() => username.to_string(),
        _ => return Err(ApiError::Validation("Field 'username' is required".into())),
    };

    info!("Received request to create user '{}'", username);

    let insert = sqlx::query("INSERT INTO users (username, full_name) VALUES (?, ?)")
        .bind(&username)
        .bind(&request.full_name)
        .execute(pool.get_ref())
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation) => {
                ApiError::Validation(format!("Username '{}' already exists", username))
            }
            _ => ApiError::from(err),
        })?;

    let user = sqlx::query_as::<_, User>("SELECT id, username, full_name FROM users WHERE id = ?")
        .bind(insert.last_insert_rowid())
        .fetch_one(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(user))
}

// Handler to delete a user. Tasks that pointed at the user keep living with
// a null assignee.
pub async fn delete_user(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let user_id = path.into_inner();
    info!("Received request to delete user {}", user_id);

    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("User {} not found", user_id)));
    }

    Ok(HttpResponse::Ok().json(AdminAckResponse {
        success: true,
        message: format!("User {} deleted", user_id),
    }))
}

// Handler to create a tag
pub async fn create_tag(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    request: web::Json<CreateTagRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let name = match request.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(ApiError::Validation("Field 'name' is required".into())),
    };
    let color = request
        .color
        .as_deref()
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .unwrap_or("#FFFFFF")
        .to_string();

    info!("Received request to create tag '{}' ({})", name, color);

    let insert = sqlx::query("INSERT INTO tags (name, color) VALUES (?, ?)")
        .bind(&name)
        .bind(&color)
        .execute(pool.get_ref())
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation) => {
                ApiError::Validation(format!("Tag '{}' already exists", name))
            }
            _ => ApiError::from(err),
        })?;

    let tag = sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tags WHERE id = ?")
        .bind(insert.last_insert_rowid())
        .fetch_one(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(tag))
}

// Handler to delete a tag and with it every association to a task
pub async fn delete_tag(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    require_admin(pool.get_ref(), &req).await?;

    let tag_id = path.into_inner();
    info!("Received request to delete tag {}", tag_id);

    let result = sqlx::query("DELETE FROM tags WHERE id = ?")
        .bind(tag_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Tag {} not found", tag_id)));
    }

    Ok(HttpResponse::Ok().json(AdminAckResponse {
        success: true,
        message: format!("Tag {} deleted", tag_id),
    }))
}
