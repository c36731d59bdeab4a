//! # Blockpage Store
//!
//! Page persistence for the application around the editor.
//!
//! The editor never touches storage. The application loads a page, opens an
//! editor on it, and saves the editor's current components when it decides
//! to. Concurrent sessions on one page are last-write-wins.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use blockpage_model::Component;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage backend for pages
pub trait PageStore {
    /// Load the ordered components of a page
    fn load(&self, page_id: &str) -> Result<Vec<Component>, StoreError>;

    /// Overwrite a page with `components`
    fn save(&mut self, page_id: &str, components: &[Component]) -> Result<(), StoreError>;

    fn exists(&self, page_id: &str) -> bool;

    /// Ids of all stored pages, sorted
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// On-disk and wire shape of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub id: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// Page ids double as file names, so they are kept to `[A-Za-z0-9_-]+`
pub fn validate_page_id(page_id: &str) -> Result<(), StoreError> {
    let valid = !page_id.is_empty()
        && page_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidPageId(page_id.to_string()))
    }
}

/// Reject pages that break the unique-id invariant
pub fn validate_components(page_id: &str, components: &[Component]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for component in components {
        if !seen.insert(component.id()) {
            return Err(StoreError::DuplicateComponentId {
                page: page_id.to_string(),
                id: component.id().to_string(),
            });
        }
    }
    Ok(())
}
