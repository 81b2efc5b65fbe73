//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Task not found in the loaded list
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    /// No task under the table cursor
    #[error("No task selected")]
    NoTaskSelected,
}
