use serde::{Deserialize, Deserializer, Serialize};

// Required fields arrive as Options so a missing one is reported through the
// normal validation path instead of a bare deserialization reject.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub project_id: Option<i64>,
    pub column: Option<String>,
    pub description: Option<String>,
    pub assigned_user_id: Option<i64>,
}

/// One optional slot per mutable column; anything else in the body is
/// dropped by deserialization. `assigned_user_id` keeps the absent/null
/// distinction: absent leaves the assignee untouched, an explicit null
/// clears it.
#[derive(Deserialize, Default)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<String>,
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_user_id: Option<Option<i64>>,
}

impl UpdateTaskRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column.is_none()
            && self.position.is_none()
            && self.assigned_user_id.is_none()
    }
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct AttachTagRequest {
    pub tag_id: Option<i64>,
}

#[derive(Serialize)]
pub struct TaskAckResponse {
    pub success: bool,
    pub message: String,
}
