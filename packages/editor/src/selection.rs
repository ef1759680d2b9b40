//! # Selection State
//!
//! Two independent tracks:
//!
//! ```text
//! single:  Idle ──select(id)──▶ SingleSelected(id) ──clear / ungroup──▶ Idle
//! multi:   {} ──toggle(id)──▶ {id, …} ──group──▶ {}   (and single = container)
//! ```
//!
//! The single selection drives the property panel, the multi-selection
//! drives grouping. Changing one never implicitly changes the other.

use pagecraft_model::NodeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    single: Option<NodeId>,
    /// Insertion-ordered set
    #[serde(default)]
    multi: Vec<NodeId>,
}

impl Selection {
    pub fn single(&self) -> Option<&NodeId> {
        self.single.as_ref()
    }

    pub fn multi(&self) -> &[NodeId] {
        &self.multi
    }

    pub fn select(&mut self, id: NodeId) {
        self.single = Some(id);
    }

    pub fn clear(&mut self) {
        self.single = None;
    }

    /// Insert if absent, remove if present
    pub fn toggle(&mut self, id: NodeId) {
        match self.multi.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.multi.remove(index);
            }
            None => self.multi.push(id),
        }
    }

    pub fn clear_multi(&mut self) {
        self.multi.clear();
    }

    pub fn is_multi_selected(&self, id: &NodeId) -> bool {
        self.multi.contains(id)
    }

    pub fn is_idle(&self) -> bool {
        self.single.is_none()
    }
}
