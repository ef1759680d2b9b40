//! # Pagecraft Editor
//!
//! Page editing engine: every canvas interaction becomes a [`Mutation`]
//! applied to one owned [`EditorState`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: clicks, drags, property panel           │
//! └─────────────────────────────────────────────┘
//!                     ↓ Mutation
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - apply mutation to a copy of the state    │
//! │  - publish the copy as the new snapshot     │
//! │  - notify on group / ungroup / copy         │
//! └─────────────────────────────────────────────┘
//!                     ↓ &Document
//! ┌─────────────────────────────────────────────┐
//! │ compiler-react: Document → JSX              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Total operations**: invalid input is a no-op, never an error
//! 2. **Atomic snapshots**: a mutation is published whole or not at all
//! 3. **Flat containers**: containers only ever hold leaves
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::EditSession;
//! use pagecraft_model::{CatalogItem, LayoutKind};
//! use pagecraft_compiler_react::CompileOptions;
//!
//! let mut session = EditSession::new("page");
//! let a = session.add(CatalogItem::new("PrimaryButton", "<button>Click</button>"), "Buttons");
//! let b = session.add(CatalogItem::new("GhostButton", "<button>Cancel</button>"), "Buttons");
//!
//! session.toggle_multi_select(&a);
//! session.toggle_multi_select(&b);
//! let row = session.group(LayoutKind::FlexRow).unwrap();
//!
//! assert_eq!(session.selection().single(), Some(&row));
//! assert!(session.generate(CompileOptions::default()).contains("flex flex-row"));
//! ```

mod errors;
mod mutations;
mod selection;
mod session;
mod sinks;

pub use errors::EditorError;
pub use mutations::{EditorState, Mutation, MutationResult, NoopReason};
pub use selection::Selection;
pub use session::{EditSession, COPIED_MESSAGE, UNGROUPED_MESSAGE};
pub use sinks::{ClipboardSink, LogSink, NotificationSink, NullSink, Recorder};

// Re-export common types for convenience
pub use pagecraft_compiler_react::CompileOptions;
pub use pagecraft_model::{CatalogItem, Document, LayoutKind, NodeId, StyleProps};
