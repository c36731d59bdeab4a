//! # Blockpage Editor
//!
//! In-memory editing engine for one landing page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: clicks, drag callbacks, shortcuts       │
//! └─────────────────────────────────────────────┘
//!                     ↓ dispatch(intent)
//! ┌─────────────────────────────────────────────┐
//! │ editor: Editor                              │
//! │  - mutations: intent → new component list   │
//! │  - history: bounded snapshot log + cursor   │
//! │  - session: selection / edit / drag state   │
//! └─────────────────────────────────────────────┘
//!                     ↓ on_change
//! ┌─────────────────────────────────────────────┐
//! │ listeners: renderer, autosave, preview      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One write path**: every change goes through [`Editor::dispatch`]
//! 2. **One step per intent**: each change is exactly one history snapshot
//! 3. **Stale ids are benign**: unknown targets are silent no-ops
//! 4. **No I/O**: loading and saving belong to the caller
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockpage_editor::{Editor, Intent};
//! use blockpage_model::ComponentType;
//!
//! let mut editor = Editor::new(store.load("home")?);
//!
//! editor.dispatch(Intent::AddFromCatalog {
//!     component_type: ComponentType::Pricing,
//!     template: None,
//! });
//! editor.dispatch(Intent::Undo);
//!
//! if editor.is_dirty() {
//!     store.save("home", editor.components())?;
//!     editor.mark_saved();
//! }
//! ```

mod editor;
mod errors;
mod history;
mod listeners;
pub mod mutations;
mod session;

pub use editor::{Editor, EditorConfig, Outcome};
pub use errors::SessionError;
pub use history::{History, HistoryEntry, MutationKind, MAX_HISTORY};
pub use listeners::{Change, ChangeCause, ChangeListener, Listeners, LogListener};
pub use mutations::{Intent, Mutation, NoOp};
pub use session::{DragState, DropEvent, Session};

// Re-export model types for convenience
pub use blockpage_model::{Component, ComponentType, Content, Styles};
