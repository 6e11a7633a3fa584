use serde::{Deserialize, Serialize};

/// Input for creating a todo. The store assigns the id and `completed`
/// starts as false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}
