//! Error types for the catalog data layer

use serde::Serialize;
use thiserror::Error;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// A persisted record blocking a delete (a live dependent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingDependent {
    pub id: i64,
    /// Human-readable label (book title, instance imprint, ...).
    pub label: String,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more field constraints were violated. Carries every
    /// violation, not just the first, so the caller can re-render the
    /// complete error set.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A delete was refused because live dependents still reference the
    /// record. Never auto-resolved; the caller surfaces the dependents.
    #[error("{message}")]
    Conflict {
        message: String,
        dependents: Vec<BlockingDependent>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Build a conflict error for a refused delete.
    pub fn conflict(message: impl Into<String>, dependents: Vec<BlockingDependent>) -> Self {
        AppError::Conflict {
            message: message.into(),
            dependents,
        }
    }
}

/// Result type alias for catalog operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    // The shell renders these payloads; pin the JSON field names.
    #[test]
    fn violation_and_dependent_json_shape() {
        let violation = FieldViolation {
            field: "name",
            message: "is required".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&violation).unwrap(),
            serde_json::json!({"field": "name", "message": "is required"})
        );

        let dependent = BlockingDependent {
            id: 7,
            label: "The Name of the Wind".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&dependent).unwrap(),
            serde_json::json!({"id": 7, "label": "The Name of the Wind"})
        );
    }

    #[test]
    fn conflict_message_is_the_display_form() {
        let err = AppError::conflict("Author 1 has 2 book(s)", vec![]);
        assert_eq!(err.to_string(), "Author 1 has 2 book(s)");
    }
}
