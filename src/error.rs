//! Custom error types for Spendbook
//!
//! This module defines the error hierarchy for the tracker using thiserror.
//! Not-found conditions on single records are normally expressed as `None`
//! or `false` by the repositories; `NotFound` is reserved for places where
//! the user named something that must exist (CLI lookups).

use thiserror::Error;

/// The main error type for Spendbook operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected before reaching storage
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Local storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transport failures talking to the remote API
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx answer from the remote API
    #[error("API request failed: {status} - {body}")]
    Api { status: u16, body: String },
}

impl TrackerError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for month classifications
    pub fn month_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for incomes
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the storage backend (local or remote)
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Json(_) | Self::Storage(_) | Self::Http(_) | Self::Api { .. }
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for Spendbook operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Validation("Please enter a valid amount".into());
        assert_eq!(err.to_string(), "Validation error: Please enter a valid amount");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::budget_not_found("Groceries");
        assert_eq!(err.to_string(), "Budget not found: Groceries");
        assert!(err.is_not_found());
        assert!(!err.is_backend_failure());
    }

    #[test]
    fn test_api_error_display() {
        let err = TrackerError::Api {
            status: 500,
            body: "workflow failed".into(),
        };
        assert_eq!(err.to_string(), "API request failed: 500 - workflow failed");
        assert!(err.is_backend_failure());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
