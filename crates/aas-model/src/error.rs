use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("invalid idShort: {0:?}")]
    InvalidIdShort(String),
    #[error("invalid concept key: {0:?}")]
    InvalidConceptKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
