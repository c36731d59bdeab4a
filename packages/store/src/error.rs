//! Error types for page storage

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),

    #[error("Page {page} contains component id {id} more than once")]
    DuplicateComponentId { page: String, id: String },
}
