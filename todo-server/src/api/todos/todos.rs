//! Todo REST API handlers
//!
//! Each handler validates untrusted input before it reaches the store and
//! translates store outcomes into HTTP status codes. A malformed or
//! non-positive id is answered exactly like a missing record so callers
//! cannot probe id validity separately from existence.

use crate::{
    ApiError, ApiResult, CreateTodoRequest, ListTodosQuery, TodoDto, UpdateTodoRequest,
    state::AppState,
};

use todo_core::{FieldValidator, NewTodo, TodoPatch};
use todo_db::{DEFAULT_LIMIT, TodoRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /todos/
///
/// Create a new todo. The store assigns the id; `completed` starts false.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<TodoDto>)> {
    let new_todo = NewTodo {
        title: req.title,
        description: req.description,
    };
    FieldValidator::validate_new_todo(&new_todo)?;

    let repo = TodoRepository::new(state.pool.clone());
    let todo = repo.create(&new_todo).await?;

    log::info!("Created todo {}", todo.id);

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// GET /todos/
///
/// List todos in insertion order with offset/limit pagination
pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> ApiResult<Json<Vec<TodoDto>>> {
    let repo = TodoRepository::new(state.pool.clone());
    let todos = repo
        .find_page(
            query.skip.unwrap_or(0),
            query.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .await?;

    Ok(Json(todos.into_iter().map(TodoDto::from).collect()))
}

/// GET /todos/{id}
///
/// Retrieve a single todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoDto>> {
    let todo_id = parse_todo_id(&id)?;

    let repo = TodoRepository::new(state.pool.clone());
    let todo = repo
        .find_by_id(todo_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Todo {} not found", todo_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(todo.into()))
}

/// PUT /todos/{id}
///
/// Partially update a todo. Only fields present in the body are changed;
/// an empty body is a no-op success returning the unchanged record.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<TodoDto>> {
    let todo_id = parse_todo_id(&id)?;

    let patch: TodoPatch = req.into();
    FieldValidator::validate_patch(&patch)?;

    let repo = TodoRepository::new(state.pool.clone());
    let todo = repo
        .update(todo_id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Todo {} not found", todo_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Updated todo {}", todo.id);

    Ok(Json(todo.into()))
}

/// DELETE /todos/{id}
///
/// Delete a todo, returning the record as it existed before removal
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoDto>> {
    let todo_id = parse_todo_id(&id)?;

    let repo = TodoRepository::new(state.pool.clone());
    let todo = repo
        .delete(todo_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Todo {} not found", todo_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Deleted todo {}", todo_id);

    Ok(Json(todo.into()))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse a path id, answering anything non-numeric or non-positive as
/// not-found rather than a distinct malformed-id status
#[track_caller]
fn parse_todo_id(raw: &str) -> ApiResult<i64> {
    let location = ErrorLocation::from(Location::caller());

    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ApiError::NotFound {
            message: "Todo not found".to_string(),
            location,
        })
}
