use super::{GrammarDefinition, RuleDef, TerminalDef};

/// Builds a [`GrammarDefinition`] in code.
///
/// ```
/// use verba_core::grammar::GrammarBuilder;
///
/// let grammar = GrammarBuilder::new()
///     .rule("start", "call_chain")
///     .terminal("DOT", ".")
///     .directive("%ignore WS")
///     .build();
/// assert_eq!(grammar.rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    grammar: GrammarDefinition,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the entry rule. Defaults to `start`.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.grammar.start = name.into();
        self
    }

    pub fn rule(self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.push_rule(name.into(), definition.into(), None)
    }

    pub fn rule_with_description(
        self,
        name: impl Into<String>,
        definition: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.push_rule(name.into(), definition.into(), Some(description.into()))
    }

    pub fn terminal(self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.push_terminal(name.into(), pattern.into(), None)
    }

    pub fn terminal_with_description(
        self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.push_terminal(name.into(), pattern.into(), Some(description.into()))
    }

    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.grammar.directives.push(directive.into());
        self
    }

    pub fn build(self) -> GrammarDefinition {
        self.grammar
    }

    // Redefining a name replaces it in place.
    fn push_rule(mut self, name: String, definition: String, description: Option<String>) -> Self {
        let rule = RuleDef {
            name,
            definition,
            description,
        };
        match self.grammar.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.grammar.rules.push(rule),
        }
        self
    }

    fn push_terminal(mut self, name: String, pattern: String, description: Option<String>) -> Self {
        let terminal = TerminalDef {
            name,
            pattern,
            description,
        };
        match self
            .grammar
            .terminals
            .iter_mut()
            .find(|t| t.name == terminal.name)
        {
            Some(existing) => *existing = terminal,
            None => self.grammar.terminals.push(terminal),
        }
        self
    }
}
