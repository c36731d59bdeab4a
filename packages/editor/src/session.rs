//! # Selection and Drag Session
//!
//! Transient per-tab state: which block is selected, which one is open for
//! editing, and the drag gesture in flight. None of it is persisted or
//! recorded in history.
//!
//! ## Drag lifecycle
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging { source, over } ──finish/cancel──▶ Idle
//! ```
//!
//! Editing and dragging are mutually exclusive: both manipulate the same list.

use crate::errors::SessionError;

/// Drag gesture state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source_id: String,
        /// Component currently under the pointer, if any
        over_id: Option<String>,
    },
}

/// A finished drag: where it started and where it was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub source_id: String,
    pub target_id: Option<String>,
}

/// Selection, edit and drag state for one editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected: Option<String>,
    editing: Option<String>,
    drag: DragState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { source_id, .. } => Some(source_id.as_str()),
            DragState::Idle => None,
        }
    }

    pub fn drop_target_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { over_id, .. } => over_id.as_deref(),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Open a component for editing, replacing any previous one
    pub fn begin_edit(&mut self, id: String) -> Result<(), SessionError> {
        if let Some(dragging) = self.dragging_id() {
            return Err(SessionError::EditWhileDragging(dragging.to_string()));
        }
        self.editing = Some(id);
        Ok(())
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn begin_drag(&mut self, id: String) -> Result<(), SessionError> {
        if let Some(dragging) = self.dragging_id() {
            return Err(SessionError::DragInProgress(dragging.to_string()));
        }
        if let Some(editing) = &self.editing {
            return Err(SessionError::DragWhileEditing(editing.clone()));
        }
        self.drag = DragState::Dragging {
            source_id: id,
            over_id: None,
        };
        Ok(())
    }

    /// Track the component under the pointer (`None` when over no target)
    pub fn drag_over(&mut self, target: Option<String>) -> Result<(), SessionError> {
        match &mut self.drag {
            DragState::Dragging { over_id, .. } => {
                *over_id = target;
                Ok(())
            }
            DragState::Idle => Err(SessionError::NoDrag),
        }
    }

    /// End the drag and report where it was released
    pub fn finish_drag(&mut self) -> Option<DropEvent> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { source_id, over_id } => Some(DropEvent {
                source_id,
                target_id: over_id,
            }),
            DragState::Idle => None,
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Drop every reference to `id`
    pub fn forget(&mut self, id: &str) {
        self.retain(|candidate| candidate != id);
    }

    /// Keep only references for which `exists` returns true.
    ///
    /// A drag whose source disappears is cancelled; a vanished drop target
    /// just stops being the target.
    pub fn retain(&mut self, mut exists: impl FnMut(&str) -> bool) {
        if self.selected.as_deref().is_some_and(|id| !exists(id)) {
            self.selected = None;
        }
        if self.editing.as_deref().is_some_and(|id| !exists(id)) {
            self.editing = None;
        }
        let orphaned = match &mut self.drag {
            DragState::Dragging { source_id, over_id } => {
                if over_id.as_deref().is_some_and(|id| !exists(id)) {
                    *over_id = None;
                }
                !exists(source_id)
            }
            DragState::Idle => false,
        };
        if orphaned {
            self.drag = DragState::Idle;
        }
    }
}
