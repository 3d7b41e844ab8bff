//! Core of verba: turns chains of verb calls into actions.
//!
//! Source text such as `track(name="Drums").add_clip(start=0, length=8)` is
//! parsed into a [`CallChain`](ast::CallChain), each call is dispatched to a
//! verb from a [`VerbRegistry`](verbs::VerbRegistry), and the resulting
//! [`Action`](runtime::Action)s are handed to a [`Runtime`](runtime::Runtime).

pub mod api;
pub mod ast;
pub mod coerce;
pub mod grammar;
pub mod interpreter;
pub mod parser;
pub mod runtime;
pub mod verbs;

pub use api::{Diagnostic, Engine, EngineOptions, Error, Plan, Severity};
pub use ast::{Call, CallChain, Value};
pub use coerce::{Args, Native};
pub use interpreter::{ActionStream, InterpretError, Interpreter};
pub use runtime::{Action, Runtime, RuntimeError};
pub use verbs::{Context, FunctionalVerbs, Outcome, Verb, VerbError, VerbRegistry, VerbSet};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Route `verba_core` logs to the test output.
    ///
    /// Dispatch logs are shown at `debug` unless `RUST_LOG`
    /// says otherwise. Safe to call from every test.
    ///
    /// ```ignore
    /// init_test_logging();
    /// let actions = interpreter.interpret(parse("track(name='A').mute()")?)?;
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("verba_core=debug"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}
