//! Error types for smartplan.

use thiserror::Error;

/// Errors that can occur in smartplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("No team members selected")]
    NoSelection,

    #[error("Team member not found: {0}")]
    UnknownMember(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Important date not found: {0}")]
    DateNotFound(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for smartplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
