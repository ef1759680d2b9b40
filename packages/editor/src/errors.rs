//! Error types for the editor
//!
//! Editing itself never fails; these cover loading and saving snapshots.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(#[from] pagecraft_model::ModelError),
}
