use sqlx::SqlitePool;

/// Shared application state handed to every handler.
///
/// The pool is the single persistence handle; handlers acquire a session
/// from it per request and nothing else is ambient.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
