//! # Edit Session
//!
//! An EditSession is the single entry point a UI talks to. It owns the
//! current [`EditorState`] snapshot and serializes every interaction
//! through [`EditSession::dispatch`]:
//!
//! 1. clone the current snapshot
//! 2. apply the mutation to the clone
//! 3. publish the clone as the new snapshot, only if the mutation applied
//!
//! A rejected mutation therefore has no observable effect at all: the
//! snapshot pointer and version stay the same. Snapshots handed out earlier
//! remain valid but stale.

use crate::mutations::{EditorState, Mutation, MutationResult};
use crate::selection::Selection;
use crate::sinks::{ClipboardSink, LogSink, NotificationSink, NullSink};
use crate::EditorError;
use pagecraft_compiler_react::{compile_to_react, CompileOptions};
use pagecraft_model::{CatalogItem, Document, IdGenerator, LayoutKind, Node, NodeId, StyleProps};
use std::rc::Rc;

pub const UNGROUPED_MESSAGE: &str = "Container ungrouped";
pub const COPIED_MESSAGE: &str = "Code copied to clipboard";

pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    current: Rc<EditorState>,

    /// Increments on every published snapshot
    version: u64,

    notifications: Box<dyn NotificationSink>,
    clipboard: Box<dyn ClipboardSink>,
}

impl EditSession {
    /// Empty page with ids seeded from the session id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let state = EditorState::new(IdGenerator::from_seed(id.clone()));
        Self::from_state(id, state)
    }

    pub fn from_state(id: impl Into<String>, state: EditorState) -> Self {
        Self {
            id: id.into(),
            current: Rc::new(state),
            version: 0,
            notifications: Box::new(LogSink),
            clipboard: Box::new(NullSink),
        }
    }

    pub fn with_notifications(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.notifications = Box::new(sink);
        self
    }

    pub fn with_clipboard(mut self, sink: impl ClipboardSink + 'static) -> Self {
        self.clipboard = Box::new(sink);
        self
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Rc<EditorState> {
        Rc::clone(&self.current)
    }

    pub fn state(&self) -> &EditorState {
        &self.current
    }

    pub fn document(&self) -> &Document {
        &self.current.document
    }

    pub fn selection(&self) -> &Selection {
        &self.current.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Node currently shown in the property panel
    pub fn selected_style(&self) -> Option<&StyleProps> {
        let id = self.current.selection.single()?;
        self.current.document.style(id)
    }

    /// Apply one mutation and publish the result
    pub fn dispatch(&mut self, mutation: Mutation) -> MutationResult {
        let mut next = EditorState::clone(&self.current);
        let result = mutation.apply(&mut next);

        match &result {
            MutationResult::Applied { .. } => self.publish(next, &mutation, &result),
            MutationResult::Noop(reason) => {
                tracing::debug!(session = %self.id, op = mutation.name(), %reason, "mutation ignored");
            }
        }

        result
    }

    fn publish(&mut self, next: EditorState, mutation: &Mutation, result: &MutationResult) {
        self.version += 1;
        tracing::debug!(
            session = %self.id,
            op = mutation.name(),
            version = self.version,
            "mutation applied"
        );
        self.current = Rc::new(next);
        self.announce(mutation, result);
    }

    fn announce(&mut self, mutation: &Mutation, result: &MutationResult) {
        match mutation {
            Mutation::Group { layout } => {
                let count = result
                    .created_id()
                    .and_then(|id| self.current.document.get(id))
                    .and_then(Node::as_container)
                    .map(|container| container.children.len())
                    .unwrap_or_default();
                self.notifications
                    .notify(&format!("Grouped {} components into a {} container", count, layout));
            }
            Mutation::Ungroup { .. } => self.notifications.notify(UNGROUPED_MESSAGE),
            _ => {}
        }
    }

    /// Add a catalog item; returns the new leaf's id
    pub fn add(&mut self, item: CatalogItem, category: &str) -> NodeId {
        let mut next = EditorState::clone(&self.current);
        let id = Mutation::insert_leaf(&mut next, &item, category);

        let mutation = Mutation::Add {
            item,
            category: category.to_string(),
        };
        self.publish(next, &mutation, &MutationResult::created(id.clone()));
        id
    }

    pub fn remove(&mut self, id: &NodeId) -> MutationResult {
        self.dispatch(Mutation::Remove { id: id.clone() })
    }

    /// Commit a drag; `over` is `None` when the drop missed every target
    pub fn reorder(&mut self, active: &NodeId, over: Option<&NodeId>) -> MutationResult {
        self.dispatch(Mutation::Reorder {
            active: active.clone(),
            over: over.cloned(),
        })
    }

    pub fn update_props(&mut self, id: &NodeId, patch: StyleProps) -> MutationResult {
        self.dispatch(Mutation::UpdateProps {
            id: id.clone(),
            patch,
        })
    }

    pub fn select(&mut self, id: &NodeId) -> MutationResult {
        self.dispatch(Mutation::Select { id: id.clone() })
    }

    pub fn clear_selection(&mut self) -> MutationResult {
        self.dispatch(Mutation::ClearSelection)
    }

    pub fn toggle_multi_select(&mut self, id: &NodeId) -> MutationResult {
        self.dispatch(Mutation::ToggleMultiSelect { id: id.clone() })
    }

    /// Group the multi-selection; returns the new container's id
    pub fn group(&mut self, layout: LayoutKind) -> Option<NodeId> {
        self.dispatch(Mutation::Group { layout }).created_id().cloned()
    }

    pub fn ungroup(&mut self, id: &NodeId) -> MutationResult {
        self.dispatch(Mutation::Ungroup { id: id.clone() })
    }

    /// Ungroup whatever container is currently selected
    pub fn ungroup_selected(&mut self) -> Option<MutationResult> {
        let id = self.current.selection.single()?.clone();
        if !self.current.document.get(&id)?.is_container() {
            return None;
        }
        Some(self.ungroup(&id))
    }

    /// Markup for the current snapshot
    pub fn generate(&self, options: CompileOptions) -> String {
        compile_to_react(&self.current.document, options)
    }

    /// Generate markup and hand it to the clipboard
    pub fn copy_code(&mut self, options: CompileOptions) -> String {
        let code = self.generate(options);
        self.clipboard.copy(&code);
        self.notifications.notify(COPIED_MESSAGE);
        code
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&*self.current)?)
    }

    pub fn from_json(id: impl Into<String>, json: &str) -> Result<Self, EditorError> {
        let state: EditorState = serde_json::from_str(json)?;
        Ok(Self::from_state(id, state))
    }
}
