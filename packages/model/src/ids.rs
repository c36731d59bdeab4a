//! Component id generation.

use uuid::Uuid;

/// Source of fresh component ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` ids, starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Skip numbers that are already taken by `existing` ids with the same prefix
    pub fn after<'a>(mut self, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let prefix = format!("{}-", self.prefix);
        let highest = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(&prefix))
            .filter_map(|n| n.parse::<u64>().ok())
            .max();
        if let Some(highest) = highest {
            self.next = self.next.max(highest + 1);
        }
        self
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("block");
        assert_eq!(ids.next_id(), "block-1");
        assert_eq!(ids.next_id(), "block-2");
    }

    #[test]
    fn test_sequential_ids_skip_existing() {
        let mut ids = SequentialIds::new("block").after(["block-4", "block-2", "other-9", "block-x"]);
        assert_eq!(ids.next_id(), "block-5");
    }

    #[test]
    fn test_boxed_generator() {
        let mut ids: Box<dyn IdGenerator> = Box::new(SequentialIds::new("b"));
        assert_eq!(ids.next_id(), "b-1");
    }
}
