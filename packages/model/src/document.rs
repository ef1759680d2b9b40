//! # Document
//!
//! The ordered top-level node list. Lookups search the top level first and
//! then exactly one level into each container, matching the depth a
//! container can have.

use crate::id::NodeId;
use crate::node::{Leaf, Node};
use crate::style::StyleProps;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub nodes: Vec<Node>,
}

/// Where a node lives in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    TopLevel(usize),
    Child { container: usize, index: usize },
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Index of a top-level node
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn locate(&self, id: &NodeId) -> Option<Location> {
        if let Some(index) = self.position(id) {
            return Some(Location::TopLevel(index));
        }

        self.nodes.iter().enumerate().find_map(|(container, node)| {
            let children = &node.as_container()?.children;
            children
                .iter()
                .position(|child| &child.id == id)
                .map(|index| Location::Child { container, index })
        })
    }

    /// Child leaf nested inside a container
    pub fn find_child(&self, id: &NodeId) -> Option<&Leaf> {
        match self.locate(id)? {
            Location::Child { container, index } => {
                self.nodes[container].as_container().map(|c| &c.children[index])
            }
            Location::TopLevel(_) => None,
        }
    }

    pub fn style(&self, id: &NodeId) -> Option<&StyleProps> {
        match self.locate(id)? {
            Location::TopLevel(index) => Some(self.nodes[index].style()),
            Location::Child { .. } => self.find_child(id).map(|leaf| &leaf.style),
        }
    }

    pub fn style_mut(&mut self, id: &NodeId) -> Option<&mut StyleProps> {
        match self.locate(id)? {
            Location::TopLevel(index) => Some(self.nodes[index].style_mut()),
            Location::Child { container, index } => match &mut self.nodes[container] {
                Node::Container(c) => Some(&mut c.children[index].style),
                Node::Leaf(_) => None,
            },
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.locate(id).is_some()
    }

    /// Top-level ids in order
    pub fn top_level_ids(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(|node| node.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Container, LayoutKind};

    fn leaf(id: &str) -> Leaf {
        Leaf {
            id: NodeId::new(id),
            source_type: "PrimaryButton".into(),
            category: "Buttons".into(),
            template: "<button>Click</button>".into(),
            style: StyleProps::default(),
        }
    }

    fn sample() -> Document {
        Document::from_nodes(vec![
            leaf("a").into(),
            Container {
                id: NodeId::new("c"),
                layout: LayoutKind::FlexRow,
                children: vec![leaf("b"), leaf("d")],
                style: StyleProps::container_defaults(),
            }
            .into(),
            leaf("e").into(),
        ])
    }

    #[test]
    fn test_locate() {
        let doc = sample();

        assert_eq!(doc.locate(&"a".into()), Some(Location::TopLevel(0)));
        assert_eq!(doc.locate(&"c".into()), Some(Location::TopLevel(1)));
        assert_eq!(
            doc.locate(&"d".into()),
            Some(Location::Child { container: 1, index: 1 })
        );
        assert_eq!(doc.locate(&"zzz".into()), None);
    }

    #[test]
    fn test_position_is_top_level_only() {
        let doc = sample();
        assert_eq!(doc.position(&"b".into()), None);
        assert!(doc.contains(&"b".into()));
    }

    #[test]
    fn test_style_mut_reaches_children() {
        let mut doc = sample();
        doc.style_mut(&"d".into()).unwrap().bg_color = Some("#000".into());

        assert_eq!(doc.find_child(&"d".into()).unwrap().style.background_color(), Some("#000"));
        assert_eq!(doc.style(&"b".into()).unwrap().background_color(), None);
    }
}
