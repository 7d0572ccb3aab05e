use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown placeholder '{{{placeholder}}}' in notice template: {template}")]
    UnknownPlaceholder {
        placeholder: String,
        template: String,
    },

    #[error("unbalanced brace in notice template: {0}")]
    UnbalancedBrace(String),

    #[error("notice template must be a single line: {0:?}")]
    MultiLine(String),
}
