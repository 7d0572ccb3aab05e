use thiserror::Error;

use crate::table::MethodError;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("tagged method '{method}' ({label}) failed: {source}")]
    InvocationFailure {
        method: &'static str,
        label: String,
        #[source]
        source: MethodError,
    },

    #[error("failed to write scan output: {0}")]
    Output(#[from] std::io::Error),
}

impl ScanError {
    /// Name of the method that failed, if the error came from an invocation.
    pub fn method(&self) -> Option<&'static str> {
        match self {
            ScanError::InvocationFailure { method, .. } => Some(*method),
            ScanError::Output(_) => None,
        }
    }
}
