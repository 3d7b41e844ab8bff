//! Tool payloads for CFG-constrained generation.
//!
//! A generator constrained by a grammar emits source text the engine can
//! parse directly. The payload shape is the "custom tool with a grammar
//! format" one understood by OpenAI-style endpoints.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use super::{GrammarDefinition, clean_for_cfg};

/// Grammar syntax of a [`CfgTool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    #[default]
    Lark,
    Regex,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Lark => write!(f, "lark"),
            Syntax::Regex => write!(f, "regex"),
        }
    }
}

/// A tool whose output is constrained by `grammar`.
#[derive(Debug, Clone, PartialEq)]
pub struct CfgTool {
    pub tool_name: String,
    pub description: String,
    pub grammar: String,
    pub syntax: Syntax,
}

impl CfgTool {
    pub fn new(
        tool_name: impl Into<String>,
        description: impl Into<String>,
        grammar: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            description: description.into(),
            grammar: grammar.into(),
            syntax: Syntax::Lark,
        }
    }

    /// A Lark tool over a rendered grammar definition.
    pub fn from_definition(
        tool_name: impl Into<String>,
        description: impl Into<String>,
        grammar: &GrammarDefinition,
    ) -> Self {
        Self::new(tool_name, description, grammar.render())
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// The tool entry, with directives and blank lines stripped from the
    /// grammar.
    pub fn build_tool(&self) -> JsonValue {
        json!({
            "type": "custom",
            "name": self.tool_name,
            "description": self.description,
            "format": {
                "type": "grammar",
                "syntax": self.syntax,
                "definition": clean_for_cfg(&self.grammar),
            },
        })
    }

    /// Output must be plain text when a grammar constrains it.
    pub fn text_format() -> JsonValue {
        json!({ "format": { "type": "text" } })
    }

    /// `tools` and `text` entries for a request.
    pub fn request_config(&self) -> JsonValue {
        json!({
            "tools": [self.build_tool()],
            "text": Self::text_format(),
        })
    }
}
