use crate::{CoreError, NewTodo, Result as CoreErrorResult, TodoPatch};

use std::panic::Location;

use error_location::ErrorLocation;

/// Substrings rejected wherever user text is accepted, matched
/// case-insensitively. A minimal denylist against the common
/// script-injection vectors, not a sanitizer: text that narrowly evades
/// these patterns is stored as-is.
const CONTENT_DENYLIST: [&str; 4] = ["<script", "onerror=", "javascript:", "data:text/html"];

const TITLE_MAX_LENGTH: usize = 500;
const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Validates user-supplied todo fields before they reach the store
pub struct FieldValidator;

impl FieldValidator {
    /// Validate a title: required, non-empty, bounded, content-safe
    #[track_caller]
    pub fn validate_title(title: &str) -> CoreErrorResult<()> {
        if title.is_empty() {
            return Err(CoreError::Validation {
                message: "title cannot be empty".to_string(),
                field: Some("title".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if title.len() > TITLE_MAX_LENGTH {
            return Err(CoreError::Validation {
                message: format!("title must not exceed {} bytes", TITLE_MAX_LENGTH),
                field: Some("title".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::check_content(title, "title")
    }

    /// Validate a description: bounded, content-safe
    #[track_caller]
    pub fn validate_description(description: &str) -> CoreErrorResult<()> {
        if description.len() > DESCRIPTION_MAX_LENGTH {
            return Err(CoreError::Validation {
                message: format!(
                    "description must not exceed {} bytes",
                    DESCRIPTION_MAX_LENGTH
                ),
                field: Some("description".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::check_content(description, "description")
    }

    /// Scan a text field against the content-safety denylist
    #[track_caller]
    pub fn check_content(value: &str, field_name: &str) -> CoreErrorResult<()> {
        let lowered = value.to_lowercase();

        for pattern in CONTENT_DENYLIST {
            if lowered.contains(pattern) {
                return Err(CoreError::Validation {
                    message: format!("{} contains potentially malicious content", field_name),
                    field: Some(field_name.to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Validate a creation request before it reaches the store
    #[track_caller]
    pub fn validate_new_todo(new_todo: &NewTodo) -> CoreErrorResult<()> {
        Self::validate_title(&new_todo.title)?;

        if let Some(ref description) = new_todo.description {
            Self::validate_description(description)?;
        }

        Ok(())
    }

    /// Validate the fields present in a partial update. Absent fields and an
    /// explicit description clear pass through untouched.
    #[track_caller]
    pub fn validate_patch(patch: &TodoPatch) -> CoreErrorResult<()> {
        if let Some(ref title) = patch.title {
            Self::validate_title(title)?;
        }

        if let Some(Some(ref description)) = patch.description {
            Self::validate_description(description)?;
        }

        Ok(())
    }
}
