//! Todo repository for CRUD operations on the todos table.
//!
//! Every mutating call runs inside its own transaction: the row is written
//! and read back before commit, so the caller always receives the record as
//! stored. Dropping the transaction on an error path rolls it back.

use crate::Result as DbErrorResult;

use todo_core::{NewTodo, Todo, TodoPatch};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Page size applied when the caller supplies no usable limit
pub const DEFAULT_LIMIT: i64 = 100;

/// Hard cap on page size, bounds response size against resource exhaustion
pub const MAX_LIMIT: i64 = 200;

const SELECT_TODO: &str = "SELECT id, title, description, completed FROM todos WHERE id = ?";

pub struct TodoRepository {
    pool: SqlitePool,
}

impl TodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new row and return the stored record including its
    /// assigned id.
    pub async fn create(&self, new_todo: &NewTodo) -> DbErrorResult<Todo> {
        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("INSERT INTO todos (title, description, completed) VALUES (?, ?, 0)")
                .bind(&new_todo.title)
                .bind(&new_todo.description)
                .execute(&mut *tx)
                .await?;

        let row = sqlx::query(SELECT_TODO)
            .bind(result.last_insert_rowid())
            .fetch_one(&mut *tx)
            .await?;

        let todo = row_to_todo(&row)?;
        tx.commit().await?;

        Ok(todo)
    }

    /// Fetch a single record, `None` when no row has this id
    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Todo>> {
        let row = sqlx::query(SELECT_TODO)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_todo).transpose()
    }

    /// Page through todos in insertion (primary key) order.
    ///
    /// `skip` is clamped to >= 0. A `limit` of zero or less reverts to
    /// [`DEFAULT_LIMIT`]; anything above [`MAX_LIMIT`] is capped there.
    pub async fn find_page(&self, skip: i64, limit: i64) -> DbErrorResult<Vec<Todo>> {
        let skip = skip.max(0);
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };

        let rows = sqlx::query(
            "SELECT id, title, description, completed FROM todos ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_todo).collect()
    }

    /// Apply the fields present in `patch` to an existing row and return the
    /// updated record.
    ///
    /// An empty patch returns the current record without touching the
    /// backing store. Returns `None` when no row has this id.
    pub async fn update(&self, id: i64, patch: &TodoPatch) -> DbErrorResult<Option<Todo>> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(SELECT_TODO)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(row_to_todo(&existing)?));
        }

        let mut set_clauses = Vec::new();
        if patch.title.is_some() {
            set_clauses.push("title = ?");
        }
        if patch.description.is_some() {
            set_clauses.push("description = ?");
        }
        if patch.completed.is_some() {
            set_clauses.push("completed = ?");
        }

        let sql = format!("UPDATE todos SET {} WHERE id = ?", set_clauses.join(", "));

        let mut query = sqlx::query(&sql);
        if let Some(ref title) = patch.title {
            query = query.bind(title);
        }
        if let Some(ref description) = patch.description {
            // An inner None binds NULL, clearing the stored description
            query = query.bind(description);
        }
        if let Some(completed) = patch.completed {
            query = query.bind(completed);
        }
        query.bind(id).execute(&mut *tx).await?;

        let row = sqlx::query(SELECT_TODO).bind(id).fetch_one(&mut *tx).await?;

        let todo = row_to_todo(&row)?;
        tx.commit().await?;

        Ok(Some(todo))
    }

    /// Remove a row, returning the record as it existed immediately before
    /// removal. Returns `None` when no row has this id.
    pub async fn delete(&self, id: i64) -> DbErrorResult<Option<Todo>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(SELECT_TODO)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let todo = row_to_todo(&row)?;

        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(todo))
    }
}

fn row_to_todo(row: &SqliteRow) -> DbErrorResult<Todo> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        completed: row.try_get("completed")?,
    })
}
