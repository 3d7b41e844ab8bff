use thiserror::Error;

/// Failure reported by a verb handler.
#[derive(Debug, Error)]
pub enum VerbError {
    #[error("missing argument '{name}'")]
    MissingArgument { name: String },

    #[error("argument '{name}' should be {expected}, got {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The verb was called in a way it does not support.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl VerbError {
    pub fn usage(message: impl Into<String>) -> Self {
        VerbError::Usage(message.into())
    }
}
