use actix_web::HttpRequest;
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::session::AdminSession;

pub const SESSION_COOKIE: &str = "admin_session";

/// Proof that a request passed the admin gate.
pub struct AdminContext {
    pub session_id: String,
}

/// Policy check every admin handler runs first: resolve the session cookie
/// against the admin_sessions table. Expired rows are deleted on sight and
/// count as no session.
pub async fn require_admin(
    pool: &SqlitePool,
    req: &HttpRequest,
) -> Result<AdminContext, ApiError> {
    let session_id = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            info!("Admin session cookie not found");
            return Err(ApiError::Unauthorized("Admin session not found".into()));
        }
    };

    let session = sqlx::query_as::<_, AdminSession>(
        "SELECT session_id, expires_at FROM admin_sessions WHERE session_id = ?",
    )
    .bind(&session_id)
    .fetch_optional(pool)
    .await?;

    let session = match session {
        Some(session) => session,
        None => {
            info!("Invalid admin session: {}", session_id);
            return Err(ApiError::Unauthorized("Invalid admin session".into()));
        }
    };

    if session.expires_at < Utc::now() {
        let _ = sqlx::query("DELETE FROM admin_sessions WHERE session_id = ?")
            .bind(&session_id)
            .execute(pool)
            .await;
        info!("Admin session expired: {}", session_id);
        return Err(ApiError::Unauthorized("Admin session expired".into()));
    }

    Ok(AdminContext {
        session_id: session.session_id,
    })
}
