//! # Page Mutations
//!
//! Intents are the requests the UI dispatches to the editor. Each list
//! mutation is computed here as a pure function from the current list to a
//! new one; the editor commits the result to history as a single step.
//!
//! ## Mutation Semantics
//!
//! ### Not found
//! - A stale id (deleted concurrently, other tab, in-flight drag) is a no-op
//! - No history entry is pushed and nothing is reported to the user
//!
//! ### Update
//! - Shallow merge over existing fields
//! - A merge that changes nothing is a no-op
//!
//! ### Duplicate
//! - Copy is appended at the end of the page, not next to the original
//!
//! ### Reorder
//! - Single-element move from the source position to the target position
//! - Components in between shift by one; this is not a swap

use crate::history::MutationKind;
use blockpage_model::{Component, ComponentType, Content, Styles};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Requests accepted by [`Editor::dispatch`](crate::Editor::dispatch)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// Append a component built by the caller
    Add { component: Component },

    /// Append a new block seeded from the template catalog
    AddFromCatalog {
        component_type: ComponentType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
    },

    /// Shallow-merge content fields
    Update { id: String, content: Content },

    /// Shallow-merge style overrides
    UpdateStyles { id: String, styles: Styles },

    Remove { id: String },

    /// Append a copy under a fresh id
    Duplicate { id: String },

    /// Move `source_id` to the position of `target_id` (drag and drop)
    Reorder { source_id: String, target_id: String },

    /// Move a component to an index, clamped to the page (keyboard move)
    Move { id: String, to_index: usize },

    /// Replace the page and start a new history
    ReplaceAll { components: Vec<Component> },

    Undo,

    Redo,
}

/// A computed list change, ready to be committed
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub components: Vec<Component>,
    pub kind: MutationKind,
    pub subject_id: Option<String>,
}

impl Mutation {
    fn new(components: Vec<Component>, kind: MutationKind, subject_id: &str) -> Self {
        Self {
            components,
            kind,
            subject_id: Some(subject_id.to_string()),
        }
    }
}

/// Why an intent left the page untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOp {
    UnknownId(String),
    DuplicateId(String),
    SameTarget(String),
    /// The id source kept returning ids already on the page
    NoFreshId,
    /// A replacement list uses the same id more than once
    RepeatedId(String),
    Unchanged,
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOp::UnknownId(id) => write!(f, "no component with id {}", id),
            NoOp::DuplicateId(id) => write!(f, "id {} is already on the page", id),
            NoOp::SameTarget(id) => write!(f, "{} is already in place", id),
            NoOp::NoFreshId => f.write_str("no unused id available"),
            NoOp::RepeatedId(id) => write!(f, "id {} appears more than once", id),
            NoOp::Unchanged => f.write_str("nothing changed"),
        }
    }
}

pub type MutationResult = Result<Mutation, NoOp>;

/// Position of `id` in the page
pub fn position(components: &[Component], id: &str) -> Option<usize> {
    components.iter().position(|c| c.id() == id)
}

fn require(components: &[Component], id: &str) -> Result<usize, NoOp> {
    position(components, id).ok_or_else(|| NoOp::UnknownId(id.to_string()))
}

/// First id that occurs more than once in `components`
pub fn repeated_id(components: &[Component]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(components.len());
    components
        .iter()
        .map(Component::id)
        .find(|id| !seen.insert(*id))
}

/// Remove the item at `from` and reinsert it at `to`.
///
/// Both indices must be in bounds.
pub fn move_index<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

pub fn add(components: &[Component], component: Component) -> MutationResult {
    if position(components, component.id()).is_some() {
        return Err(NoOp::DuplicateId(component.id().to_string()));
    }

    let subject = component.id().to_string();
    let mut next = components.to_vec();
    next.push(component);
    Ok(Mutation::new(next, MutationKind::Add, &subject))
}

pub fn update(components: &[Component], id: &str, content: &Content) -> MutationResult {
    let index = require(components, id)?;

    let mut next = components.to_vec();
    if !next[index].merge_content(content) {
        return Err(NoOp::Unchanged);
    }
    Ok(Mutation::new(next, MutationKind::Update, id))
}

pub fn update_styles(components: &[Component], id: &str, styles: &Styles) -> MutationResult {
    let index = require(components, id)?;

    let mut next = components.to_vec();
    if !next[index].merge_styles(styles) {
        return Err(NoOp::Unchanged);
    }
    Ok(Mutation::new(next, MutationKind::Update, id))
}

pub fn remove(components: &[Component], id: &str) -> MutationResult {
    require(components, id)?;

    let next = components
        .iter()
        .filter(|c| c.id() != id)
        .cloned()
        .collect();
    Ok(Mutation::new(next, MutationKind::Remove, id))
}

/// Append a copy of `id`.
///
/// `new_id` is only called when the source exists; `None` means no unused id
/// could be found.
pub fn duplicate(
    components: &[Component],
    id: &str,
    new_id: impl FnOnce() -> Option<String>,
) -> MutationResult {
    let index = require(components, id)?;

    let copy = components[index].duplicate_as(new_id().ok_or(NoOp::NoFreshId)?);
    add(components, copy)
}

pub fn reorder(components: &[Component], source_id: &str, target_id: &str) -> MutationResult {
    if source_id == target_id {
        return Err(NoOp::SameTarget(source_id.to_string()));
    }
    let from = require(components, source_id)?;
    let to = require(components, target_id)?;

    let mut next = components.to_vec();
    move_index(&mut next, from, to);
    Ok(Mutation::new(next, MutationKind::Reorder, source_id))
}

pub fn move_to(components: &[Component], id: &str, to_index: usize) -> MutationResult {
    let from = require(components, id)?;
    let to = to_index.min(components.len() - 1);
    if from == to {
        return Err(NoOp::SameTarget(id.to_string()));
    }

    let mut next = components.to_vec();
    move_index(&mut next, from, to);
    Ok(Mutation::new(next, MutationKind::Reorder, id))
}
