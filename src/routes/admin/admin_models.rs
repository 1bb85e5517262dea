use serde::{Deserialize, Serialize};

use crate::models::{project::Project, tag::Tag, user::User};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct AdminAckResponse {
    pub success: bool,
    pub message: String,
}

// Everything the admin page is built from, in one response
#[derive(Serialize)]
pub struct DashboardResponse {
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub tags: Vec<Tag>,
}

#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}
