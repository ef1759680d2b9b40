//! # Page Mutations
//!
//! Every user interaction on the canvas is one [`Mutation`]. Applying a
//! mutation is a transform over [`EditorState`]: it either changes the state
//! and reports [`MutationResult::Applied`], or leaves it untouched and reports
//! [`MutationResult::Noop`] with the reason.
//!
//! Invalid input is never an error. Unknown ids, a self-drop while
//! reordering, or grouping fewer than two nodes are all absorbed as no-ops.
//!
//! ## Mutation Semantics
//!
//! ### Reorder
//! - Array move: remove the active node, insert it at the index the target held
//! - Only top-level nodes can be reordered
//!
//! ### Group
//! - Selected nodes keep document order inside the new container
//! - The container lands where the *first selected* node used to be
//! - Containers never nest: grouping a container is refused
//!
//! ### Ungroup
//! - Children are spliced back, in stored order, at the container's index

use crate::selection::Selection;
use pagecraft_model::{
    CatalogItem, Container, IdGenerator, LayoutKind, Leaf, Node, NodeId, StyleProps,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic page mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new leaf built from a catalog item
    Add { item: CatalogItem, category: String },

    /// Remove a top-level node
    Remove { id: NodeId },

    /// Drag-and-drop reorder; `over` is `None` when dropped outside any target
    Reorder {
        active: NodeId,
        #[serde(default)]
        over: Option<NodeId>,
    },

    /// Shallow-merge style props into a node (top level or container child)
    UpdateProps { id: NodeId, patch: StyleProps },

    Select { id: NodeId },

    ClearSelection,

    ToggleMultiSelect { id: NodeId },

    /// Wrap the multi-selected top-level nodes in a new container
    Group { layout: LayoutKind },

    /// Dissolve a container, promoting its children to the top level
    Ungroup { id: NodeId },
}

/// Why a mutation left the state untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoopReason {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node is not at the top level: {0}")]
    NotTopLevel(NodeId),

    #[error("Dropped onto itself")]
    SameTarget,

    #[error("No drop target")]
    NoDropTarget,

    #[error("Grouping needs at least 2 selected nodes, got {0}")]
    NotEnoughSelected(usize),

    #[error("Containers cannot be nested: {0}")]
    NestedContainer(NodeId),

    #[error("Node is not a container: {0}")]
    NotAContainer(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationResult {
    /// State changed; `created` is the id of a node the mutation created
    Applied { created: Option<NodeId> },
    Noop(NoopReason),
}

impl MutationResult {
    fn applied() -> Self {
        MutationResult::Applied { created: None }
    }

    pub(crate) fn created(id: NodeId) -> Self {
        MutationResult::Applied { created: Some(id) }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, MutationResult::Applied { .. })
    }

    pub fn created_id(&self) -> Option<&NodeId> {
        match self {
            MutationResult::Applied { created } => created.as_ref(),
            MutationResult::Noop(_) => None,
        }
    }
}

/// The single owned editing aggregate: document, selection and id source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub document: pagecraft_model::Document,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub ids: IdGenerator,
}

impl EditorState {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            document: Default::default(),
            selection: Selection::default(),
            ids,
        }
    }

    /// Pure transform: consume a state, return the next one
    pub fn reduce(mut self, mutation: &Mutation) -> (Self, MutationResult) {
        let result = mutation.apply(&mut self);
        (self, result)
    }
}

impl Mutation {
    /// Apply the mutation in place. A `Noop` result guarantees `state` is unchanged.
    pub fn apply(&self, state: &mut EditorState) -> MutationResult {
        match self {
            Mutation::Add { item, category } => {
                MutationResult::created(Self::insert_leaf(state, item, category))
            }
            Mutation::Remove { id } => Self::apply_remove(state, id),
            Mutation::Reorder { active, over } => {
                Self::apply_reorder(state, active, over.as_ref())
            }
            Mutation::UpdateProps { id, patch } => Self::apply_update_props(state, id, patch),
            Mutation::Select { id } => {
                state.selection.select(id.clone());
                MutationResult::applied()
            }
            Mutation::ClearSelection => {
                state.selection.clear();
                MutationResult::applied()
            }
            Mutation::ToggleMultiSelect { id } => {
                state.selection.toggle(id.clone());
                MutationResult::applied()
            }
            Mutation::Group { layout } => Self::apply_group(state, *layout),
            Mutation::Ungroup { id } => Self::apply_ungroup(state, id),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "add",
            Mutation::Remove { .. } => "remove",
            Mutation::Reorder { .. } => "reorder",
            Mutation::UpdateProps { .. } => "updateProps",
            Mutation::Select { .. } => "select",
            Mutation::ClearSelection => "clearSelection",
            Mutation::ToggleMultiSelect { .. } => "toggleMultiSelect",
            Mutation::Group { .. } => "group",
            Mutation::Ungroup { .. } => "ungroup",
        }
    }

    /// Append a leaf for `item`; adding never fails
    pub(crate) fn insert_leaf(state: &mut EditorState, item: &CatalogItem, category: &str) -> NodeId {
        let id = state.ids.new_id();

        state.document.nodes.push(Node::Leaf(Leaf {
            id: id.clone(),
            source_type: item.name.clone(),
            category: category.to_string(),
            template: item.template.clone(),
            style: StyleProps::default(),
        }));

        id
    }

    fn apply_remove(state: &mut EditorState, id: &NodeId) -> MutationResult {
        let Some(index) = state.document.position(id) else {
            return Self::missing(state, id);
        };

        state.document.nodes.remove(index);
        if state.selection.single() == Some(id) {
            state.selection.clear();
        }

        MutationResult::applied()
    }

    fn apply_reorder(
        state: &mut EditorState,
        active: &NodeId,
        over: Option<&NodeId>,
    ) -> MutationResult {
        let Some(over) = over else {
            return MutationResult::Noop(NoopReason::NoDropTarget);
        };
        if active == over {
            return MutationResult::Noop(NoopReason::SameTarget);
        }

        let nodes = &mut state.document.nodes;
        let Some(from) = nodes.iter().position(|n| n.id() == active) else {
            return MutationResult::Noop(NoopReason::NodeNotFound(active.clone()));
        };
        let Some(to) = nodes.iter().position(|n| n.id() == over) else {
            return MutationResult::Noop(NoopReason::NodeNotFound(over.clone()));
        };

        let node = nodes.remove(from);
        nodes.insert(to, node);

        MutationResult::applied()
    }

    fn apply_update_props(
        state: &mut EditorState,
        id: &NodeId,
        patch: &StyleProps,
    ) -> MutationResult {
        match state.document.style_mut(id) {
            Some(style) => {
                style.merge(patch.clone());
                MutationResult::applied()
            }
            None => MutationResult::Noop(NoopReason::NodeNotFound(id.clone())),
        }
    }

    fn apply_group(state: &mut EditorState, layout: LayoutKind) -> MutationResult {
        let selected_ids = state.selection.multi();
        if selected_ids.len() < 2 {
            return MutationResult::Noop(NoopReason::NotEnoughSelected(selected_ids.len()));
        }

        let nodes = &state.document.nodes;
        let resolved: Vec<&NodeId> = selected_ids
            .iter()
            .filter(|id| nodes.iter().any(|n| n.id() == *id))
            .collect();
        if resolved.len() < 2 {
            return MutationResult::Noop(NoopReason::NotEnoughSelected(resolved.len()));
        }

        if let Some(nested) = nodes
            .iter()
            .find(|n| n.is_container() && resolved.contains(&n.id()))
        {
            return MutationResult::Noop(NoopReason::NestedContainer(nested.id().clone()));
        }

        // Anchor on selection order, not document order
        let anchor = resolved[0];
        let insert_at = nodes.iter().position(|n| n.id() == anchor).unwrap_or(0);

        let (selected, mut remaining): (Vec<Node>, Vec<Node>) = std::mem::take(&mut state.document.nodes)
            .into_iter()
            .partition(|n| state.selection.is_multi_selected(n.id()));

        let children = selected
            .into_iter()
            .filter_map(|node| match node {
                Node::Leaf(leaf) => Some(leaf),
                Node::Container(_) => None,
            })
            .collect();

        let id = state.ids.new_id();
        let container = Container {
            id: id.clone(),
            layout,
            children,
            style: StyleProps::container_defaults(),
        };

        let insert_at = insert_at.min(remaining.len());
        remaining.insert(insert_at, Node::Container(container));
        state.document.nodes = remaining;

        state.selection.clear_multi();
        state.selection.select(id.clone());

        MutationResult::created(id)
    }

    fn apply_ungroup(state: &mut EditorState, id: &NodeId) -> MutationResult {
        let Some(index) = state.document.position(id) else {
            return Self::missing(state, id);
        };
        let children = match state.document.nodes.get_mut(index) {
            Some(Node::Container(container)) => std::mem::take(&mut container.children),
            _ => return MutationResult::Noop(NoopReason::NotAContainer(id.clone())),
        };

        state
            .document
            .nodes
            .splice(index..=index, children.into_iter().map(Node::Leaf));
        state.selection.clear();

        MutationResult::applied()
    }

    fn missing(state: &EditorState, id: &NodeId) -> MutationResult {
        if state.document.contains(id) {
            MutationResult::Noop(NoopReason::NotTopLevel(id.clone()))
        } else {
            MutationResult::Noop(NoopReason::NodeNotFound(id.clone()))
        }
    }
}
