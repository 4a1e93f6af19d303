//! Typed failures of the task core.
//!
//! Validation and not-found errors are expected outcomes the caller shows to
//! the user; nothing has been changed when one is returned. Storage errors
//! mean the durable medium could not be read or written.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Task with ID {0} not found")]
    NotFound(i64),

    #[error("List '{0}' not found")]
    CategoryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_) | TaskError::CategoryNotFound(_))
    }
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<csv::Error> for TaskError {
    fn from(err: csv::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
