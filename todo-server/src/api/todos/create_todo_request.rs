use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
