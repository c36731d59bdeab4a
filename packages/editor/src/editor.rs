//! # Editor
//!
//! The state object owned by one editing session of one page.
//!
//! ## Lifecycle
//!
//! ```text
//! load(page) → Editor::new → dispatch(intent)* → components() → save(page)
//!                               ↓
//!                    history snapshot + listeners
//! ```
//!
//! The editor never talks to storage. The surrounding application loads the
//! page, hands the list to [`Editor::new`], and later saves
//! [`Editor::components`] whenever it decides to (see [`Editor::is_dirty`]).

use crate::errors::SessionError;
use crate::history::{History, MutationKind, MAX_HISTORY};
use crate::listeners::{Change, ChangeCause, ChangeListener, Listeners};
use crate::mutations::{self, Intent, MutationResult, NoOp};
use crate::session::Session;
use blockpage_model::{Component, IdGenerator, TemplateCatalog, UuidGenerator};
use std::sync::Arc;
use tracing::{debug, info};

/// Draws from the id source before an add is given up
const MAX_ID_ATTEMPTS: usize = 1024;

/// Next id from `ids` that is not already on the page
fn fresh_id(ids: &mut dyn IdGenerator, components: &[Component]) -> Option<String> {
    (0..MAX_ID_ATTEMPTS)
        .map(|_| ids.next_id())
        .find(|id| mutations::position(components, id).is_none())
}

/// Editor tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum number of history snapshots, at least 1
    pub max_history: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
        }
    }
}

/// Whether a dispatched intent changed the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// In-memory page editor
pub struct Editor {
    history: History,
    session: Session,
    ids: Box<dyn IdGenerator>,
    catalog: Arc<TemplateCatalog>,
    listeners: Listeners,

    /// Revision of the snapshot last written to storage
    saved_revision: Option<u64>,
}

impl Editor {
    /// Open a page with default settings, UUID ids and the builtin catalog
    pub fn new(components: Vec<Component>) -> Self {
        Self::with_config(components, EditorConfig::default())
    }

    /// Open a page with explicit settings.
    ///
    /// Component ids must be unique; `blockpage_store` checks this on load.
    pub fn with_config(components: Vec<Component>, config: EditorConfig) -> Self {
        let history = History::with_capacity(components, config.max_history);
        let saved_revision = Some(history.current_entry().revision);

        Self {
            history,
            session: Session::new(),
            ids: Box::new(UuidGenerator),
            catalog: Arc::new(TemplateCatalog::builtin()),
            listeners: Listeners::new(),
            saved_revision,
        }
    }

    /// Use a different id source for new and duplicated components
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<TemplateCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    pub fn add_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.add(Box::new(listener));
    }

    /// The page, in render order
    pub fn components(&self) -> &[Component] {
        self.history.current()
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components().iter().find(|c| c.id() == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.component(id).is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Apply one intent. Stale ids and history boundaries are no-ops.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Add { component } => {
                let result = mutations::add(self.components(), component);
                self.commit("add", result)
            }
            Intent::AddFromCatalog {
                component_type,
                template: template_id,
            } => {
                // Resolve first so a rejected template never consumes an id
                let resolved = self
                    .catalog
                    .resolve(component_type, template_id.as_deref());
                let template = match resolved {
                    Ok(template) => template,
                    Err(e) => {
                        debug!(error = %e, "Ignoring addFromCatalog");
                        return Outcome::Unchanged;
                    }
                };
                let components = self.history.current();
                let result = match fresh_id(&mut *self.ids, components) {
                    Some(id) => mutations::add(components, template.instantiate(id)),
                    None => Err(NoOp::NoFreshId),
                };
                self.commit("addFromCatalog", result)
            }
            Intent::Update { id, content } => {
                let result = mutations::update(self.components(), &id, &content);
                self.commit("update", result)
            }
            Intent::UpdateStyles { id, styles } => {
                let result = mutations::update_styles(self.components(), &id, &styles);
                self.commit("updateStyles", result)
            }
            Intent::Remove { id } => {
                let result = mutations::remove(self.components(), &id);
                let outcome = self.commit("remove", result);
                if outcome.is_changed() {
                    self.session.forget(&id);
                }
                outcome
            }
            Intent::Duplicate { id } => {
                let ids = &mut *self.ids;
                let components = self.history.current();
                let result =
                    mutations::duplicate(components, &id, || fresh_id(ids, components));
                self.commit("duplicate", result)
            }
            Intent::Reorder {
                source_id,
                target_id,
            } => {
                let result = mutations::reorder(self.components(), &source_id, &target_id);
                self.commit("reorder", result)
            }
            Intent::Move { id, to_index } => {
                let result = mutations::move_to(self.components(), &id, to_index);
                self.commit("move", result)
            }
            Intent::ReplaceAll { components } => self.replace_all(components),
            Intent::Undo => self.undo(),
            Intent::Redo => self.redo(),
        }
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Outcome {
        if self.history.undo().is_none() {
            debug!("Nothing to undo");
            return Outcome::Unchanged;
        }
        self.navigated(ChangeCause::Undo)
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Outcome {
        if self.history.redo().is_none() {
            debug!("Nothing to redo");
            return Outcome::Unchanged;
        }
        self.navigated(ChangeCause::Redo)
    }

    /// Replace the page and start a new history from it.
    ///
    /// The new content has not been saved, so the editor is dirty afterwards.
    /// A list that repeats an id is ignored.
    pub fn replace_all(&mut self, components: Vec<Component>) -> Outcome {
        if let Some(id) = mutations::repeated_id(&components) {
            debug!(reason = %NoOp::RepeatedId(id.to_string()), "Ignoring replaceAll");
            return Outcome::Unchanged;
        }
        self.history.reset(components);
        self.saved_revision = None;
        info!(blocks = self.components().len(), "History reset");
        self.reconcile_session();
        self.notify(ChangeCause::Reset);
        Outcome::Changed
    }

    /// Remember the current snapshot as the one in storage
    pub fn mark_saved(&mut self) {
        self.saved_revision = Some(self.history.current_entry().revision);
    }

    /// True when the page differs from what was last saved
    pub fn is_dirty(&self) -> bool {
        self.saved_revision != Some(self.history.current_entry().revision)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.session.selected_id()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.session.editing_id()
    }

    pub fn dragging_id(&self) -> Option<&str> {
        self.session.dragging_id()
    }

    pub fn drop_target_id(&self) -> Option<&str> {
        self.session.drop_target_id()
    }

    /// Select a component, or clear the selection with `None`
    pub fn select(&mut self, id: Option<&str>) -> Result<(), SessionError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.session.select(id.map(str::to_string));
        Ok(())
    }

    /// Open a component for editing. Not allowed during a drag.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), SessionError> {
        self.require(id)?;
        self.session.begin_edit(id.to_string())
    }

    pub fn end_edit(&mut self) {
        self.session.end_edit();
    }

    /// Start dragging a component. Not allowed while editing.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), SessionError> {
        self.require(id)?;
        self.session.begin_drag(id.to_string())
    }

    /// Track the drop target under the pointer (`None` when outside every target)
    pub fn drag_over(&mut self, target_id: Option<&str>) -> Result<(), SessionError> {
        if let Some(id) = target_id {
            self.require(id)?;
        }
        self.session.drag_over(target_id.map(str::to_string))
    }

    /// Release the drag.
    ///
    /// Dropping on another component reorders the page once; dropping outside
    /// any target or onto the dragged component itself changes nothing.
    pub fn end_drag(&mut self) -> Outcome {
        let Some(drop) = self.session.finish_drag() else {
            debug!("end_drag without a drag in progress");
            return Outcome::Unchanged;
        };

        match drop.target_id {
            Some(target_id) => self.dispatch(Intent::Reorder {
                source_id: drop.source_id,
                target_id,
            }),
            None => {
                debug!(source = %drop.source_id, "Drag ended outside any target");
                Outcome::Unchanged
            }
        }
    }

    pub fn cancel_drag(&mut self) {
        self.session.cancel_drag();
    }

    fn require(&self, id: &str) -> Result<(), SessionError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(SessionError::UnknownComponent(id.to_string()))
        }
    }

    fn commit(&mut self, intent: &str, result: MutationResult) -> Outcome {
        let mutation = match result {
            Ok(mutation) => mutation,
            Err(reason) => {
                debug!(intent, %reason, "Ignoring intent");
                return Outcome::Unchanged;
            }
        };

        let kind = mutation.kind;
        let evicted = self
            .history
            .push(mutation.components, kind, mutation.subject_id);

        debug!(
            intent,
            kind = %kind,
            subject = self.history.current_entry().subject_id.as_deref().unwrap_or("-"),
            len = self.history.len(),
            cursor = self.history.cursor(),
            evicted,
            "Committed mutation"
        );

        self.notify(ChangeCause::Mutation(kind));
        Outcome::Changed
    }

    fn navigated(&mut self, cause: ChangeCause) -> Outcome {
        debug!(
            %cause,
            cursor = self.history.cursor(),
            len = self.history.len(),
            "Moved through history"
        );
        self.reconcile_session();
        self.notify(cause);
        Outcome::Changed
    }

    /// Clear session references to components that are no longer on the page
    fn reconcile_session(&mut self) {
        let components = self.history.current();
        self.session
            .retain(|id| components.iter().any(|c| c.id() == id));
    }

    fn notify(&mut self, cause: ChangeCause) {
        if self.listeners.is_empty() {
            return;
        }

        let entry = self.history.current_entry();
        let change = Change {
            cause,
            subject_id: match cause {
                ChangeCause::Mutation(_) => entry.subject_id.as_deref(),
                _ => None,
            },
            components: entry.components(),
        };
        self.listeners.notify(&change);
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("blocks", &self.components().len())
            .field("history_len", &self.history.len())
            .field("cursor", &self.history.cursor())
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpage_model::{ComponentType, SequentialIds};

    fn page(ids: &[&str]) -> Vec<Component> {
        ids.iter()
            .map(|id| Component::new(*id, ComponentType::Content))
            .collect()
    }

    #[test]
    fn test_editor_opens_clean() {
        let editor = Editor::new(page(&["a", "b"]));
        assert_eq!(editor.components().len(), 2);
        assert_eq!(editor.history().len(), 1);
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_add_from_catalog_uses_injected_ids() {
        let mut editor = Editor::new(Vec::new()).with_ids(SequentialIds::new("block"));

        let outcome = editor.dispatch(Intent::AddFromCatalog {
            component_type: ComponentType::Hero,
            template: None,
        });

        assert_eq!(outcome, Outcome::Changed);
        let hero = editor.component("block-1").unwrap();
        assert_eq!(hero.component_type, ComponentType::Hero);
        assert_eq!(hero.template.as_deref(), Some("hero-centered"));
        assert!(hero.content.contains_key("heading"));
    }

    #[test]
    fn test_add_from_catalog_bad_template_is_noop() {
        let mut editor = Editor::new(Vec::new());
        let outcome = editor.dispatch(Intent::AddFromCatalog {
            component_type: ComponentType::Hero,
            template: Some("pricing-tiers".to_string()),
        });
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_dirty_tracking_follows_cursor() {
        let mut editor = Editor::new(page(&["a"]));
        editor.dispatch(Intent::Remove { id: "a".to_string() });
        assert!(editor.is_dirty());

        editor.undo();
        assert!(!editor.is_dirty());

        editor.redo();
        editor.mark_saved();
        assert!(!editor.is_dirty());

        editor.undo();
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_replace_all_is_dirty() {
        let mut editor = Editor::new(page(&["a"]));
        editor.dispatch(Intent::ReplaceAll {
            components: page(&["x"]),
        });
        assert!(editor.is_dirty());
        editor.mark_saved();
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_session_requires_known_ids() {
        let mut editor = Editor::new(page(&["a"]));
        assert_eq!(
            editor.select(Some("zzz")),
            Err(SessionError::UnknownComponent("zzz".to_string()))
        );
        assert_eq!(
            editor.begin_drag("zzz"),
            Err(SessionError::UnknownComponent("zzz".to_string()))
        );
        editor.select(Some("a")).unwrap();
        assert_eq!(editor.selected_id(), Some("a"));
        editor.select(None).unwrap();
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_end_drag_without_drag() {
        let mut editor = Editor::new(page(&["a"]));
        assert_eq!(editor.end_drag(), Outcome::Unchanged);
    }

    #[test]
    fn test_debug_output() {
        let editor = Editor::new(page(&["a"]));
        let debug = format!("{:?}", editor);
        assert!(debug.contains("blocks: 1"));
    }
}
