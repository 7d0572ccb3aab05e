use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("marker label must not be empty")]
    EmptyLabel,
}

pub type ModelResult<T> = Result<T, ModelError>;
