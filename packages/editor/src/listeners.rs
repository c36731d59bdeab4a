//! # Change Listeners
//!
//! Consumers of the page (renderer, autosave, preview) subscribe to the
//! editor instead of polling it.
//!
//! Listeners are:
//! - **Synchronous**: called inside `dispatch`, after the new state is committed
//! - **Quiet on no-ops**: never called when an intent changed nothing
//! - **Read-only**: they see the page, they cannot mutate it

use crate::history::MutationKind;
use blockpage_model::Component;
use std::fmt;
use tracing::info;

/// What moved the page to its new state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Mutation(MutationKind),
    Undo,
    Redo,
    /// History was re-seeded (page load or whole-page replacement)
    Reset,
}

impl fmt::Display for ChangeCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeCause::Mutation(kind) => write!(f, "{}", kind),
            ChangeCause::Undo => f.write_str("undo"),
            ChangeCause::Redo => f.write_str("redo"),
            ChangeCause::Reset => f.write_str("reset"),
        }
    }
}

/// Notification sent to listeners after a change
#[derive(Debug, Clone, Copy)]
pub struct Change<'a> {
    pub cause: ChangeCause,

    /// Component targeted by the mutation, if any
    pub subject_id: Option<&'a str>,

    /// The page after the change
    pub components: &'a [Component],
}

/// Subscriber to page changes
pub trait ChangeListener {
    fn on_change(&mut self, change: &Change<'_>);
}

impl<F> ChangeListener for F
where
    F: FnMut(&Change<'_>),
{
    fn on_change(&mut self, change: &Change<'_>) {
        self(change)
    }
}

/// Logs every change at info level
#[derive(Debug, Default)]
pub struct LogListener;

impl ChangeListener for LogListener {
    fn on_change(&mut self, change: &Change<'_>) {
        info!(
            cause = %change.cause,
            subject = change.subject_id.unwrap_or("-"),
            blocks = change.components.len(),
            "Page changed"
        );
    }
}

/// Listener set owned by the editor
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `change` to every listener in registration order
    pub fn notify(&mut self, change: &Change<'_>) {
        for listener in &mut self.listeners {
            listener.on_change(change);
        }
    }
}
