//! # Pagecraft Model
//!
//! In-memory page document: an ordered list of top-level nodes, each either a
//! [`Leaf`] wrapping one catalog fragment or a [`Container`] laying out a flat
//! list of leaves.
//!
//! ```text
//! Document
//! ├── Leaf        (fragment template + style props)
//! ├── Container   (layout kind + style props)
//! │   ├── Leaf
//! │   └── Leaf
//! └── Leaf
//! ```

pub mod catalog;
pub mod document;
pub mod error;
pub mod id;
pub mod node;
pub mod style;

pub use catalog::{Catalog, CatalogCategory, CatalogItem};
pub use document::{Document, Location};
pub use error::{ModelError, ModelResult};
pub use id::{get_document_id, IdGenerator, NodeId};
pub use node::{Container, LayoutKind, Leaf, Node, CONTAINER_CATEGORY};
pub use style::{AlignItems, Alignment, FlexWrap, Justify, StyleProps};
