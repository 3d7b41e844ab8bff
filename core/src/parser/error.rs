use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the source it was produced from.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Number literal that does not fit any numeric representation
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: String, span: Span) -> Self {
        Self { kind, src, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ("P001", None),
            ParseErrorKind::InvalidNumber { .. } => {
                ("P003", Some("Check the number format".to_string()))
            }
            ParseErrorKind::Other { .. } => ("P999", None),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: Some(self.span.clone()),
            help,
            code: Some(code.to_string()),
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: found_at(source, &span, &negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::ident => "identifier",
            Rule::number | Rule::string | Rule::boolean | Rule::function_ref => "value",
            Rule::named_arg => "argument",
            Rule::call | Rule::call_chain => "call",
            Rule::EOI => "end of input",
            _ => "call",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe what was found at the error location.
fn found_at(source: &str, span: &Span, negatives: &[Rule]) -> String {
    if let Some(rule) = negatives.first() {
        return format!("{:?}", rule);
    }
    match source.get(span.0.start..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
