use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid user identifier: {0:?}")]
    InvalidUserId(String),
    #[error("missing required column {0:?}")]
    MissingColumn(String),
    #[error("row has {actual} fields but the header has {expected}")]
    RowArity { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
