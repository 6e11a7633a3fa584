pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    todos::{
        create_todo_request::CreateTodoRequest,
        list_todos_query::ListTodosQuery,
        todo_dto::TodoDto,
        todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
        update_todo_request::UpdateTodoRequest,
    },
};

pub use crate::config::Config;
pub use crate::routes::build_router;
pub use crate::state::AppState;
