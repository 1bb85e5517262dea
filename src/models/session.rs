use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct AdminSession {
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}
