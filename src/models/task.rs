use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw task row. `column` plus `position` is the board placement: the column
/// is a free-text status bucket, the position the zero-based append order
/// inside it.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub assigned_user_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub column: String,
    pub position: i64,
}
