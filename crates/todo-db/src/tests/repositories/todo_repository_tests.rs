use crate::{DEFAULT_LIMIT, MAX_LIMIT, TodoRepository};

use todo_core::{NewTodo, TodoPatch};

use sqlx::SqlitePool;

async fn setup_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    crate::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        description: Some("A test todo".to_string()),
    }
}

#[tokio::test]
async fn given_new_todo_when_created_then_returns_stored_record() {
    let repo = TodoRepository::new(setup_db().await);

    let todo = repo.create(&new_todo("Buy milk")).await.unwrap();

    assert!(todo.id > 0);
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description.as_deref(), Some("A test todo"));
    assert!(!todo.completed);
}

#[tokio::test]
async fn given_multiple_todos_when_created_then_ids_are_unique() {
    let repo = TodoRepository::new(setup_db().await);

    let first = repo.create(&new_todo("First")).await.unwrap();
    let second = repo.create(&new_todo("Second")).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn given_created_todo_when_fetched_then_round_trips() {
    let repo = TodoRepository::new(setup_db().await);

    let created = repo.create(&new_todo("Buy milk")).await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn given_missing_id_when_fetched_then_returns_none() {
    let repo = TodoRepository::new(setup_db().await);

    let result = repo.find_by_id(999_999).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_empty_patch_when_updated_then_leaves_record_untouched() {
    let repo = TodoRepository::new(setup_db().await);
    let created = repo.create(&new_todo("Buy milk")).await.unwrap();

    let updated = repo
        .update(created.id, &TodoPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated, created);
    assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap(), created);
}

#[tokio::test]
async fn given_completed_patch_when_updated_then_changes_only_completed() {
    let repo = TodoRepository::new(setup_db().await);
    let created = repo.create(&new_todo("Buy milk")).await.unwrap();

    let patch = TodoPatch {
        completed: Some(true),
        ..Default::default()
    };
    let updated = repo.update(created.id, &patch).await.unwrap().unwrap();

    assert!(updated.completed);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
}

#[tokio::test]
async fn given_null_description_patch_when_updated_then_clears_description() {
    let repo = TodoRepository::new(setup_db().await);
    let created = repo.create(&new_todo("Buy milk")).await.unwrap();
    assert!(created.description.is_some());

    let patch = TodoPatch {
        description: Some(None),
        ..Default::default()
    };
    let updated = repo.update(created.id, &patch).await.unwrap().unwrap();

    assert!(updated.description.is_none());
    assert_eq!(updated.title, created.title);
}

#[tokio::test]
async fn given_missing_id_when_updated_then_returns_none() {
    let repo = TodoRepository::new(setup_db().await);

    let patch = TodoPatch {
        title: Some("New title".to_string()),
        ..Default::default()
    };
    let result = repo.update(999_999, &patch).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_existing_todo_when_deleted_then_returns_prior_record() {
    let repo = TodoRepository::new(setup_db().await);
    let created = repo.create(&new_todo("Buy milk")).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap().unwrap();

    assert_eq!(deleted, created);
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_missing_id_when_deleted_then_returns_none() {
    let repo = TodoRepository::new(setup_db().await);

    let result = repo.delete(999_999).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_rows_when_paged_then_preserves_insertion_order() {
    let repo = TodoRepository::new(setup_db().await);
    for i in 0..5 {
        repo.create(&new_todo(&format!("Todo {}", i))).await.unwrap();
    }

    let page = repo.find_page(1, 2).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "Todo 1");
    assert_eq!(page[1].title, "Todo 2");
}

#[tokio::test]
async fn given_oversized_limit_when_paged_then_caps_at_max() {
    let repo = TodoRepository::new(setup_db().await);
    for i in 0..(MAX_LIMIT + 5) {
        repo.create(&new_todo(&format!("Todo {}", i))).await.unwrap();
    }

    let page = repo.find_page(0, 500).await.unwrap();

    assert_eq!(page.len() as i64, MAX_LIMIT);
}

#[tokio::test]
async fn given_non_positive_limit_when_paged_then_uses_default() {
    let repo = TodoRepository::new(setup_db().await);
    for i in 0..(DEFAULT_LIMIT + 20) {
        repo.create(&new_todo(&format!("Todo {}", i))).await.unwrap();
    }

    let zero = repo.find_page(0, 0).await.unwrap();
    let negative = repo.find_page(0, -1).await.unwrap();

    assert_eq!(zero.len() as i64, DEFAULT_LIMIT);
    assert_eq!(negative.len() as i64, DEFAULT_LIMIT);
}

#[tokio::test]
async fn given_negative_skip_when_paged_then_treated_as_zero() {
    let repo = TodoRepository::new(setup_db().await);
    for i in 0..3 {
        repo.create(&new_todo(&format!("Todo {}", i))).await.unwrap();
    }

    let page = repo.find_page(-10, 10).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(page[0].title, "Todo 0");
}
