#![allow(dead_code)]

//! Test infrastructure for todo-server API tests

use todo_server::AppState;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    todo_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a todo directly, returning its id
pub async fn create_test_todo(pool: &SqlitePool, title: &str) -> i64 {
    let result =
        sqlx::query("INSERT INTO todos (title, description, completed) VALUES (?, ?, 0)")
            .bind(title)
            .bind("A test todo")
            .execute(pool)
            .await
            .expect("Failed to create test todo");

    result.last_insert_rowid()
}
