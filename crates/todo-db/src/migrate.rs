//! Embedded schema migrations.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Apply the embedded migrations to the given pool
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
