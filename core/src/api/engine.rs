//! The engine: source text in, actions out.

use std::sync::Arc;

use super::{EngineOptions, Error};
use crate::ast::CallChain;
use crate::interpreter::{ActionStream, Interpreter};
use crate::parser::{Parser, PestParser};
use crate::runtime::{Action, Runtime, execute_all};
use crate::verbs::VerbRegistry;

/// What [`Engine::execute`] runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan<'s> {
    /// Compiled in full before anything is executed.
    Source(&'s str),
    /// Actions compiled earlier.
    Actions(Vec<Action>),
}

impl<'s> From<&'s str> for Plan<'s> {
    fn from(source: &'s str) -> Self {
        Plan::Source(source)
    }
}

impl From<Vec<Action>> for Plan<'_> {
    fn from(actions: Vec<Action>) -> Self {
        Plan::Actions(actions)
    }
}

/// Parses, interprets and executes call chains against one verb registry.
///
/// # Example
///
/// ```ignore
/// use verba_core::api::Engine;
/// use verba_core::runtime::{Action, RecordingRuntime};
/// use verba_core::verbs::VerbRegistry;
///
/// let registry = VerbRegistry::builder()
///     .verb("track", |args, _| {
///         Ok(Action::new("create_track").with("name", args.required_str("name")?).into())
///     })
///     .build();
/// let engine = Engine::new(registry);
///
/// let actions = engine.compile(r#"track(name="Drums")"#)?;
/// assert_eq!(actions[0].kind, "create_track");
///
/// let mut runtime = RecordingRuntime::new();
/// engine.execute(r#"track(name="Bass")"#, &mut runtime)?;
/// ```
#[derive(Debug, Clone)]
pub struct Engine<P: Parser = PestParser> {
    parser: P,
    interpreter: Interpreter,
    options: EngineOptions,
}

impl Engine {
    /// An engine using the built-in syntax and default options.
    pub fn new(registry: impl Into<Arc<VerbRegistry>>) -> Self {
        Self::builder().verbs(registry).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

impl<P: Parser> Engine<P> {
    pub fn registry(&self) -> &VerbRegistry {
        self.interpreter.registry()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse without interpreting.
    pub fn parse(&self, source: &str) -> Result<CallChain, Error> {
        Ok(self.parser.parse(source)?)
    }

    /// Parse and interpret everything, stopping at the first error.
    pub fn compile(&self, source: &str) -> Result<Vec<Action>, Error> {
        Ok(self.stream(source)?.collect::<Result<Vec<_>, _>>()?)
    }

    /// Parse, then interpret lazily.
    ///
    /// Parse errors and the call limit are reported here; verb errors come
    /// out of the stream.
    pub fn stream(&self, source: &str) -> Result<ActionStream<'_>, Error> {
        let chain = self.parse(source)?;
        self.stream_chain(chain)
    }

    /// Interpret an already parsed chain lazily.
    pub fn stream_chain(&self, chain: CallChain) -> Result<ActionStream<'_>, Error> {
        if let Some(max) = self.options.max_calls.filter(|&max| chain.len() > max) {
            return Err(Error::Api(format!(
                "chain has {} calls, the limit is {max}",
                chain.len()
            )));
        }
        Ok(self.interpreter.stream(chain))
    }

    /// Run a plan against `runtime`, returning how many actions it executed.
    ///
    /// A source plan is compiled completely first, so a parse or verb error
    /// reaches the runtime with zero actions executed. A runtime failure is
    /// not rolled back. Use [`Engine::stream`] to execute while interpreting.
    pub fn execute<'s>(
        &self,
        plan: impl Into<Plan<'s>>,
        runtime: &mut dyn Runtime,
    ) -> Result<usize, Error> {
        let actions = match plan.into() {
            Plan::Actions(actions) => actions,
            Plan::Source(source) => self.compile(source)?,
        };
        Ok(execute_all(&actions, runtime)?)
    }
}

/// Configures an [`Engine`].
#[derive(Debug, Default)]
pub struct EngineBuilder<P = PestParser> {
    parser: P,
    registry: Option<Arc<VerbRegistry>>,
    options: EngineOptions,
}

impl<P: Parser> EngineBuilder<P> {
    /// Use another parser backend.
    pub fn parser<Q: Parser>(self, parser: Q) -> EngineBuilder<Q> {
        EngineBuilder {
            parser,
            registry: self.registry,
            options: self.options,
        }
    }

    pub fn verbs(mut self, registry: impl Into<Arc<VerbRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the engine. Without verbs every call is an unknown verb.
    pub fn build(self) -> Engine<P> {
        let registry = self.registry.unwrap_or_default();
        Engine {
            parser: self.parser,
            interpreter: Interpreter::new(registry),
            options: self.options,
        }
    }
}
