//! Task Error Handling
//!
//! Error types for build-task operations: registry lookup, compatibility
//! checking, lifecycle execution, and attribute handling.

use crate::core::error_handling::ContextualError;
use std::fmt;

/// Result type alias for task operations
pub type TaskResult<T> = std::result::Result<T, TaskError>;

/// Error types for build-task operations
#[derive(Debug, Clone, PartialEq)]
pub enum TaskError {
    /// Task not found in registry
    TaskNotFound { task_name: String },

    /// Task API version incompatible with the host
    VersionIncompatible { message: String },

    /// Task lifecycle operation failed
    ExecutionError {
        task_name: String,
        operation: String,
        cause: String,
    },

    /// Generic task error
    Generic { message: String },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::TaskNotFound { task_name } => {
                write!(f, "Task not found: {}", task_name)
            }
            TaskError::VersionIncompatible { message } => {
                write!(f, "Version incompatible: {}", message)
            }
            TaskError::ExecutionError {
                task_name,
                operation,
                cause,
            } => {
                write!(f, "Task '{}' failed during '{}': {}", task_name, operation, cause)
            }
            TaskError::Generic { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for TaskError {}

impl ContextualError for TaskError {
    fn is_user_actionable(&self) -> bool {
        // Generic errors carry attribute and settings messages written for
        // the user; the rest are host-side failures
        matches!(self, TaskError::Generic { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            TaskError::Generic { message } => Some(message),
            _ => None,
        }
    }
}
