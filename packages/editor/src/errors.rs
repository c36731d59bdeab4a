//! Error types for the editor

use thiserror::Error;

/// Rejected selection, edit or drag transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Component not found: {0}")]
    UnknownComponent(String),

    #[error("Already dragging {0}")]
    DragInProgress(String),

    #[error("Cannot edit while dragging {0}")]
    EditWhileDragging(String),

    #[error("Cannot drag while editing {0}")]
    DragWhileEditing(String),

    #[error("No drag in progress")]
    NoDrag,
}
