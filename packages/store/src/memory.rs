//! In-process page store, for tests and previews.

use crate::{validate_components, validate_page_id, PageStore, StoreError};
use blockpage_model::Component;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: BTreeMap<String, Vec<Component>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one page already in it
    pub fn with_page(mut self, page_id: impl Into<String>, components: Vec<Component>) -> Self {
        self.pages.insert(page_id.into(), components);
        self
    }
}

impl PageStore for MemoryStore {
    fn load(&self, page_id: &str) -> Result<Vec<Component>, StoreError> {
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(page_id.to_string()))
    }

    fn save(&mut self, page_id: &str, components: &[Component]) -> Result<(), StoreError> {
        validate_page_id(page_id)?;
        validate_components(page_id, components)?;
        self.pages.insert(page_id.to_string(), components.to_vec());
        Ok(())
    }

    fn exists(&self, page_id: &str) -> bool {
        self.pages.contains_key(page_id)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.pages.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpage_model::ComponentType;

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let page = vec![Component::new("a", ComponentType::Hero)];

        store.save("home", &page).unwrap();

        assert!(store.exists("home"));
        assert_eq!(store.load("home").unwrap(), page);
        assert_eq!(store.list().unwrap(), vec!["home".to_string()]);
    }

    #[test]
    fn test_missing_page() {
        let store = MemoryStore::new();
        assert!(matches!(store.load("nope"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new().with_page("home", Vec::new());
        store.save("home", &[Component::new("a", ComponentType::Faq)]).unwrap();
        store.save("home", &[Component::new("b", ComponentType::Faq)]).unwrap();
        assert_eq!(store.load("home").unwrap()[0].id(), "b");
    }
}
