//! Where actions meet side effects.
//!
//! Verbs only describe work as [`Action`]s; a [`Runtime`] performs it. Actions
//! are delivered one at a time in the order the verbs produced them. There is
//! no transaction around a plan: if the runtime fails on the third action,
//! the first two have already happened and nothing is rolled back.

mod action;

#[cfg(test)]
mod runtime_test;

pub use action::{Action, Payload};

use std::borrow::Borrow;
use std::io::{self, Write};

use thiserror::Error;

/// Opaque failure reported by a runtime. The core never inspects it.
pub type RuntimeError = Box<dyn std::error::Error + Send + Sync>;

/// Performs actions.
pub trait Runtime {
    fn execute(&mut self, action: &Action) -> Result<(), RuntimeError>;
}

impl<F> Runtime for F
where
    F: FnMut(&Action) -> Result<(), RuntimeError>,
{
    fn execute(&mut self, action: &Action) -> Result<(), RuntimeError> {
        self(action)
    }
}

/// A runtime failed partway through a plan.
///
/// `index` is both the position of the failing action and the number of
/// actions that were already executed.
#[derive(Debug, Error)]
#[error("runtime failed on action #{index} ('{kind}'): {source}")]
pub struct ExecutionError {
    pub index: usize,
    pub kind: String,
    #[source]
    pub source: RuntimeError,
}

/// Feed `actions` to `runtime` in order, stopping at the first failure.
///
/// Returns the number of actions executed.
pub fn execute_all<I>(actions: I, runtime: &mut dyn Runtime) -> Result<usize, ExecutionError>
where
    I: IntoIterator,
    I::Item: Borrow<Action>,
{
    let mut executed = 0;
    for action in actions {
        let action: &Action = action.borrow();
        tracing::trace!(kind = %action.kind, index = executed, "executing");
        runtime.execute(action).map_err(|source| ExecutionError {
            index: executed,
            kind: action.kind.clone(),
            source,
        })?;
        executed += 1;
    }
    Ok(executed)
}

/// Writes one line per action. Used when nothing else is configured.
pub struct PrintRuntime<W: Write> {
    out: W,
}

impl PrintRuntime<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PrintRuntime<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Runtime for PrintRuntime<W> {
    fn execute(&mut self, action: &Action) -> Result<(), RuntimeError> {
        let payload = serde_json::to_string(&action.payload)?;
        writeln!(self.out, "Action: {} with payload: {}", action.kind, payload)?;
        Ok(())
    }
}

/// Keeps every action it is given.
#[derive(Debug, Default, Clone)]
pub struct RecordingRuntime {
    pub actions: Vec<Action>,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.kind.as_str()).collect()
    }
}

impl Runtime for RecordingRuntime {
    fn execute(&mut self, action: &Action) -> Result<(), RuntimeError> {
        self.actions.push(action.clone());
        Ok(())
    }
}
