use todo_core::Todo;

use serde::Serialize;

/// Todo DTO for JSON serialization
///
/// Serialized bare: single-record responses and list elements share this
/// shape. A missing description serializes as an explicit null.
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<Todo> for TodoDto {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            completed: t.completed,
        }
    }
}
