//! Parser boundary.
//!
//! The interpreter only ever sees a [`CallChain`]; how source text becomes
//! one is up to a [`Parser`] implementation. [`PestParser`] is the built-in
//! backend for the default syntax.

pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

use crate::ast::CallChain;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{CallChainParser, PestParser, Rule, parse};
pub use syntax::Span;

/// Turns source text into a call chain.
pub trait Parser {
    fn parse(&self, source: &str) -> Result<CallChain, ParseError>;
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse(&self, source: &str) -> Result<CallChain, ParseError> {
        (**self).parse(source)
    }
}
