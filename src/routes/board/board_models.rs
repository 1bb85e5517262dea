use serde::{Deserialize, Serialize};

use crate::models::{project::Project, tag::Tag};

#[derive(Serialize)]
pub struct BoardResponse {
    pub project: Project,
    pub tasks: Vec<BoardTask>,
}

/// Task as the board shows it: tags resolved, the assignee resolved to an
/// object or null, the raw foreign keys stripped.
#[derive(Serialize)]
pub struct BoardTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub column: String,
    pub position: i64,
    pub tags: Vec<Tag>,
    pub assigned_user: Option<AssignedUser>,
}

#[derive(Serialize, Deserialize)]
pub struct AssignedUser {
    pub id: i64,
    pub username: String,
}
