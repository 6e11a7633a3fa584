pub mod error;
pub mod field_validator;
pub mod models;

pub use error::{CoreError, ErrorLocation, Result};
pub use field_validator::FieldValidator;
pub use models::new_todo::NewTodo;
pub use models::todo::Todo;
pub use models::todo_patch::TodoPatch;

#[cfg(test)]
mod tests;
