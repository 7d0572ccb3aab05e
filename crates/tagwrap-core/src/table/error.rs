use tagwrap_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("method '{0}' is already registered")]
    DuplicateMethod(&'static str),

    #[error("invalid marker: {0}")]
    Model(#[from] ModelError),
}
