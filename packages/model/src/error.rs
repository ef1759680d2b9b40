use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown layout kind: {0}")]
    UnknownLayout(String),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
