use crate::error::ModelError;
use crate::id::NodeId;
use crate::style::StyleProps;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category carried by every container
pub const CONTAINER_CATEGORY: &str = "Container";

/// How a container lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    #[serde(rename = "flex-row")]
    FlexRow,
    #[serde(rename = "flex-col")]
    FlexCol,
    #[serde(rename = "grid-2")]
    Grid2,
    #[serde(rename = "grid-3")]
    Grid3,
    #[serde(rename = "grid-4")]
    Grid4,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::FlexRow,
        LayoutKind::FlexCol,
        LayoutKind::Grid2,
        LayoutKind::Grid3,
        LayoutKind::Grid4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::FlexRow => "flex-row",
            LayoutKind::FlexCol => "flex-col",
            LayoutKind::Grid2 => "grid-2",
            LayoutKind::Grid3 => "grid-3",
            LayoutKind::Grid4 => "grid-4",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownLayout(s.to_string()))
    }
}

/// A node wrapping one catalog-sourced markup fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaf {
    pub id: NodeId,
    /// Catalog item name the fragment came from
    pub source_type: String,
    pub category: String,
    /// Opaque fragment markup owned by the catalog
    pub template: String,
    #[serde(default)]
    pub style: StyleProps,
}

/// A node laying out a flat list of leaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: NodeId,
    pub layout: LayoutKind,
    pub children: Vec<Leaf>,
    #[serde(default)]
    pub style: StyleProps,
}

/// Top-level document entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Leaf(leaf) => &leaf.id,
            Node::Container(container) => &container.id,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.category,
            Node::Container(_) => CONTAINER_CATEGORY,
        }
    }

    pub fn style(&self) -> &StyleProps {
        match self {
            Node::Leaf(leaf) => &leaf.style,
            Node::Container(container) => &container.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut StyleProps {
        match self {
            Node::Leaf(leaf) => &mut leaf.style,
            Node::Container(container) => &mut container.style,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}
