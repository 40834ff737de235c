use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("line address must be 1-based, got {0}")]
    InvalidAddress(usize),
    #[error("unknown schema: {0}")]
    UnknownSchema(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
