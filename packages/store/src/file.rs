//! # JSON File Store
//!
//! One pretty-printed JSON document per page: `<dir>/<page_id>.json`.
//!
//! Saves write a sibling temp file and rename it over the page, so a crash
//! mid-write never leaves a truncated page behind.

use crate::{validate_components, validate_page_id, PageDocument, PageStore, StoreError};
use blockpage_model::Component;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a page file
    pub fn page_path(&self, page_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", page_id, EXTENSION))
    }
}

impl PageStore for JsonFileStore {
    fn load(&self, page_id: &str) -> Result<Vec<Component>, StoreError> {
        validate_page_id(page_id)?;
        let path = self.page_path(page_id);

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(page_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let document: PageDocument = serde_json::from_str(&source)?;
        validate_components(page_id, &document.components)?;

        debug!(page = page_id, blocks = document.components.len(), path = %path.display(), "Loaded page");
        Ok(document.components)
    }

    fn save(&mut self, page_id: &str, components: &[Component]) -> Result<(), StoreError> {
        validate_page_id(page_id)?;
        validate_components(page_id, components)?;
        fs::create_dir_all(&self.dir)?;

        let document = PageDocument {
            id: page_id.to_string(),
            components: components.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        let path = self.page_path(page_id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        debug!(page = page_id, blocks = components.len(), path = %path.display(), "Saved page");
        Ok(())
    }

    fn exists(&self, page_id: &str) -> bool {
        validate_page_id(page_id).is_ok() && self.page_path(page_id).is_file()
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut pages = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().map(|ext| ext == EXTENSION).unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if validate_page_id(stem).is_ok() {
                        pages.push(stem.to_string());
                    }
                }
            }
        }
        pages.sort();
        Ok(pages)
    }
}
