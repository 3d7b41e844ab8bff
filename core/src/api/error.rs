//! Public error types.
//!
//! Every failure of the engine ends up as an [`Error`]; each variant can be
//! turned into a [`Diagnostic`] for rendering.

use core::fmt;

use thiserror::Error;

use crate::interpreter::InterpretError;
use crate::parser::{ParseError, Span};
use crate::runtime::ExecutionError;

/// Error type for all engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text is not a valid call chain.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A verb could not be dispatched or failed.
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// The runtime rejected an action. Earlier actions were already executed.
    #[error(transparent)]
    Runtime(#[from] ExecutionError),

    /// Invalid API usage (e.g., a chain over the configured limit).
    #[error("API error: {0}")]
    Api(String),
}

impl Error {
    /// Source text the error refers to, when there is one.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Error::Parse(err) => Some(&err.src),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(err) => err.to_diagnostic(),
            Error::Interpret(err) => err.to_diagnostic(),
            Error::Runtime(err) => Diagnostic {
                severity: Severity::Error,
                message: err.to_string(),
                span: None,
                help: Some(format!(
                    "{} action(s) were executed before the failure",
                    err.index
                )),
                code: Some("R001".to_string()),
            },
            Error::Api(_) => Diagnostic::error(self.to_string()),
        }
    }
}

/// A diagnostic message (error, warning, or info), optionally located in the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue, when the error has one.
    pub span: Option<Span>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span: None,
            help: None,
            code: None,
        }
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the source cannot be turned into actions.
    Error,
    /// Warning - suspicious input that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
