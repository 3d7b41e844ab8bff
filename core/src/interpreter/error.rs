use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::verbs::VerbError;

/// Why an interpretation pass stopped.
///
/// Actions yielded before the failure stay valid; nothing is rolled back.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("unknown verb '{verb}' (call #{position})")]
    UnknownVerb { verb: String, position: usize },

    /// The handler returned something outside the three [`Outcome`] shapes.
    ///
    /// Handlers written against [`Verb`] cannot produce this, since
    /// [`Outcome`] only has those shapes. It stays part of the taxonomy for
    /// frontends that adapt untyped handler results into outcomes.
    ///
    /// [`Outcome`]: crate::verbs::Outcome
    /// [`Verb`]: crate::verbs::Verb
    #[error("verb '{verb}' returned an invalid result: {result}")]
    InvalidHandlerResult { verb: String, result: String },

    #[error("verb '{verb}' failed: {source}")]
    Verb {
        verb: String,
        #[source]
        source: VerbError,
    },
}

impl InterpretError {
    /// Name of the verb the pass stopped at.
    pub fn verb(&self) -> &str {
        match self {
            InterpretError::UnknownVerb { verb, .. }
            | InterpretError::InvalidHandlerResult { verb, .. }
            | InterpretError::Verb { verb, .. } => verb,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match self {
            InterpretError::UnknownVerb { .. } => {
                ("I001", Some("Check the verb name against the registry".to_string()))
            }
            InterpretError::InvalidHandlerResult { .. } => (
                "I002",
                Some("A verb returns an action, an action with context, or a list of actions".to_string()),
            ),
            InterpretError::Verb { .. } => ("I003", None),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: None,
            help,
            code: Some(code.to_string()),
        }
    }
}
