//! Walks a call chain, dispatching each call to its verb.
//!
//! The context starts empty, becomes whatever the previous verb left behind
//! and is dropped with the stream.

mod error;
mod stream;

use std::sync::Arc;

pub use error::InterpretError;
pub use stream::ActionStream;

use crate::ast::CallChain;
use crate::runtime::Action;
use crate::verbs::VerbRegistry;

#[derive(Debug, Clone)]
pub struct Interpreter {
    registry: Arc<VerbRegistry>,
}

impl Interpreter {
    pub fn new(registry: Arc<VerbRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VerbRegistry {
        &self.registry
    }

    /// Interpret lazily. See [`ActionStream`].
    pub fn stream(&self, chain: CallChain) -> ActionStream<'_> {
        ActionStream::new(&self.registry, chain)
    }

    /// Interpret the whole chain, stopping at the first error.
    pub fn interpret(&self, chain: CallChain) -> Result<Vec<Action>, InterpretError> {
        self.stream(chain).collect()
    }
}

impl From<VerbRegistry> for Interpreter {
    fn from(registry: VerbRegistry) -> Self {
        Self::new(Arc::new(registry))
    }
}
