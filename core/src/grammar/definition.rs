use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use hashbrown::HashSet;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{GrammarBuilder, GrammarError};

lazy_static! {
    static ref DEFAULT_GRAMMAR: GrammarDefinition = built_in_grammar();
}

fn default_start() -> String {
    "start".to_string()
}

/// A grammar as named rules, named terminals and parser directives.
///
/// This is what gets handed to a constrained generator; the built-in
/// [`PestParser`](crate::parser::PestParser) does not read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarDefinition {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub terminals: Vec<TerminalDef>,
    #[serde(default)]
    pub directives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDef {
    pub name: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalDef {
    pub name: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for GrammarDefinition {
    fn default() -> Self {
        Self {
            start: default_start(),
            rules: Vec::new(),
            terminals: Vec::new(),
            directives: Vec::new(),
        }
    }
}

impl GrammarDefinition {
    pub fn from_toml_str(text: &str) -> Result<Self, GrammarError> {
        let grammar: Self = toml::from_str(text)?;
        grammar.validate()?;
        Ok(grammar)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, GrammarError> {
        let grammar: Self = serde_yaml::from_str(text)?;
        grammar.validate()?;
        Ok(grammar)
    }

    /// Load a `.toml`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let load: fn(&str) -> Result<Self, GrammarError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => {
                return Err(GrammarError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let text = fs::read_to_string(path).map_err(|source| GrammarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading grammar");
        load(&text)
    }

    /// Reject empty or repeated rule and terminal names.
    pub fn validate(&self) -> Result<(), GrammarError> {
        check_names("rule", self.rules.iter().map(|r| r.name.as_str()))?;
        check_names("terminal", self.terminals.iter().map(|t| t.name.as_str()))
    }

    pub fn rule(&self, name: &str) -> Option<&RuleDef> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn terminal(&self, name: &str) -> Option<&TerminalDef> {
        self.terminals.iter().find(|t| t.name == name)
    }

    /// Render as Lark grammar text.
    ///
    /// Descriptions become `//` comments. Terminal patterns that are neither
    /// a `/regex/` nor already quoted are emitted as string literals.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.rule(&self.start).is_none() {
            let _ = writeln!(out, "start: {}", self.start);
            out.push('\n');
        }

        for rule in &self.rules {
            if let Some(description) = &rule.description {
                let _ = writeln!(out, "// {description}");
            }
            let _ = writeln!(out, "{}: {}", rule.name, rule.definition);
        }

        if !self.terminals.is_empty() {
            out.push('\n');
        }
        for terminal in &self.terminals {
            if let Some(description) = &terminal.description {
                let _ = writeln!(out, "// {description}");
            }
            let _ = writeln!(out, "{}: {}", terminal.name, terminal_pattern(&terminal.pattern));
        }

        if !self.directives.is_empty() {
            out.push('\n');
        }
        for directive in &self.directives {
            let _ = writeln!(out, "{directive}");
        }

        out
    }

    /// The grammar of the built-in call-chain syntax.
    pub fn default_grammar() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

fn built_in_grammar() -> GrammarDefinition {
    GrammarBuilder::new()
        .rule_with_description(
            "start",
            r#"call_chain (";"? call_chain)* ";"?"#,
            "One or more call chains",
        )
        .rule_with_description("call_chain", "call (DOT call)*", "Chain of calls")
        .rule_with_description("call", r#"IDENTIFIER "(" args? ")""#, "Verb call")
        .rule("args", "arg (COMMA arg)* COMMA?")
        .rule("arg", r#"IDENTIFIER "=" value | value"#)
        .rule("value", "NUMBER | STRING | BOOL | function_ref | IDENTIFIER")
        .rule_with_description(
            "function_ref",
            r#""@" IDENTIFIER"#,
            "Reference to a verb, passed as an argument",
        )
        .terminal("DOT", ".")
        .terminal("COMMA", ",")
        .terminal("NUMBER", r"/-?\d+(\.\d+)?/")
        .terminal("STRING", r#"/"([^"\\]|\\.)*"|'([^'\\]|\\.)*'/"#)
        .terminal("BOOL", r#""true" | "false""#)
        .terminal("IDENTIFIER", "/[a-zA-Z_][a-zA-Z0-9_]*/")
        .terminal_with_description("COMMENT", "/#[^\\n]*/", "Line comment")
        .directive("%import common.WS")
        .directive("%ignore WS")
        .directive("%ignore COMMENT")
        .build()
}

fn terminal_pattern(pattern: &str) -> String {
    let trimmed = pattern.trim();
    if trimmed.starts_with('/') || trimmed.starts_with('"') {
        trimmed.to_string()
    } else {
        format!("{trimmed:?}")
    }
}

fn check_names<'a>(
    what: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), GrammarError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(GrammarError::EmptyName { what });
        }
        if !seen.insert(name) {
            return Err(GrammarError::Duplicate {
                what,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Drop blank lines and `%` directives, which CFG-constrained generators do
/// not accept.
pub fn clean_for_cfg(grammar: &str) -> String {
    grammar
        .lines()
        .filter(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('%')
        })
        .collect::<Vec<_>>()
        .join("\n")
}
