use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelveError {
    #[error("Invalid grid size: {0} (must be at least 1)")]
    InvalidGridSize(usize),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DelveError>;
