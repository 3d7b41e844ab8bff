//! Grammar definitions for constrained generators.
//!
//! A [`GrammarDefinition`] is authored in code with [`GrammarBuilder`] or
//! loaded from TOML/YAML, rendered to Lark text, and wrapped in a
//! [`CfgTool`] payload.

mod builder;
mod cfg;
mod definition;
mod error;

pub use builder::GrammarBuilder;
pub use cfg::{CfgTool, Syntax};
pub use definition::{GrammarDefinition, RuleDef, TerminalDef, clean_for_cfg};
pub use error::GrammarError;

#[cfg(test)]
mod grammar_test;
