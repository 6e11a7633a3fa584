//! Todo entity - the persisted task record.

use serde::{Deserialize, Serialize};

/// A stored todo as it exists in the backing table.
///
/// The id is assigned by the store exactly once, at creation, and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}
