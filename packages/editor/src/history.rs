//! # Undo/Redo History
//!
//! Linear log of full component-list snapshots with a cursor pointing at "now".
//!
//! ## Design
//!
//! - Every committed mutation pushes one snapshot of the whole list
//! - Undo/redo only move the cursor; snapshots are never modified
//! - Pushing from the middle of the log discards the redo-able future
//! - The log is bounded; the oldest snapshots are evicted first
//! - Snapshots are reference-counted, so reading the current list never copies
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(seed);
//! history.push(next, MutationKind::Add, Some("hero-1".into()));
//!
//! assert!(history.can_undo());
//! let previous = history.undo();   // Some(seed)
//! let again = history.redo();      // Some(next)
//! ```

use blockpage_model::Component;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of snapshots kept per session
pub const MAX_HISTORY: usize = 50;

/// What produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    /// Seed snapshot (page load or whole-list replacement)
    Load,
    Add,
    Remove,
    Update,
    Reorder,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Load => "load",
            MutationKind::Add => "add",
            MutationKind::Remove => "remove",
            MutationKind::Update => "update",
            MutationKind::Reorder => "reorder",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable snapshot of the page
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    components: Arc<Vec<Component>>,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    pub kind: MutationKind,

    /// Component the mutation targeted, if any
    pub subject_id: Option<String>,

    /// Unique within one history, never reused
    pub revision: u64,
}

impl HistoryEntry {
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// Bounded undo/redo log
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,

    /// Index of the snapshot that is "now"
    cursor: usize,

    /// Maximum number of snapshots kept
    capacity: usize,

    next_revision: u64,
}

impl History {
    /// Create a history seeded with the loaded page, keeping [`MAX_HISTORY`] snapshots
    pub fn new(seed: Vec<Component>) -> Self {
        Self::with_capacity(seed, MAX_HISTORY)
    }

    /// Create a history with a custom bound.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero: the seed snapshot must always fit.
    pub fn with_capacity(seed: Vec<Component>, capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least 1");

        let mut history = Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_HISTORY)),
            cursor: 0,
            capacity,
            next_revision: 0,
        };
        history.reset(seed);
        history
    }

    /// Drop every snapshot and start over from `seed`
    pub fn reset(&mut self, seed: Vec<Component>) {
        self.entries.clear();
        let entry = self.entry(seed, MutationKind::Load, None);
        self.entries.push_back(entry);
        self.cursor = 0;
    }

    /// Record a new snapshot after the cursor.
    ///
    /// Returns the number of snapshots evicted from the front.
    pub fn push(
        &mut self,
        components: Vec<Component>,
        kind: MutationKind,
        subject_id: Option<String>,
    ) -> usize {
        // New action invalidates the future
        self.entries.truncate(self.cursor + 1);

        let entry = self.entry(components, kind, subject_id);
        self.entries.push_back(entry);
        self.cursor = self.entries.len() - 1;

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        self.cursor = self.cursor.saturating_sub(evicted);

        evicted
    }

    /// Step back one snapshot and return it, or `None` at the oldest snapshot
    pub fn undo(&mut self) -> Option<&[Component]> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot and return it, or `None` at the newest snapshot
    pub fn redo(&mut self) -> Option<&[Component]> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The component list at the cursor
    pub fn current(&self) -> &[Component] {
        self.current_entry().components()
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Kind of the step the next undo would revert
    pub fn undo_kind(&self) -> Option<MutationKind> {
        self.can_undo().then(|| self.entries[self.cursor].kind)
    }

    /// Kind of the step the next redo would reapply
    pub fn redo_kind(&self) -> Option<MutationKind> {
        self.can_redo().then(|| self.entries[self.cursor + 1].kind)
    }

    /// Number of steps that can be undone
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Number of steps that can be redone
    pub fn redo_levels(&self) -> usize {
        self.entries.len() - 1 - self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its seed snapshot
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    fn entry(
        &mut self,
        components: Vec<Component>,
        kind: MutationKind,
        subject_id: Option<String>,
    ) -> HistoryEntry {
        let revision = self.next_revision;
        self.next_revision += 1;

        HistoryEntry {
            components: Arc::new(components),
            timestamp: Utc::now(),
            kind,
            subject_id,
            revision,
        }
    }
}
