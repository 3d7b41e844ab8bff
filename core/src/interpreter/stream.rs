use std::collections::VecDeque;
use std::iter::{Enumerate, FusedIterator};
use std::vec;

use super::InterpretError;
use crate::ast::{Call, CallChain};
use crate::coerce::coerce_args;
use crate::runtime::Action;
use crate::verbs::{Context, Outcome, VerbRegistry};

/// Lazily interprets a call chain, one verb at a time.
///
/// A verb is only dispatched once every action of the previous verb has been
/// pulled, so interleaving `next()` with executing each action never runs
/// ahead of the consumer. Dropping the stream abandons the rest of the chain.
/// After the first error the stream is exhausted.
pub struct ActionStream<'a> {
    registry: &'a VerbRegistry,
    calls: Enumerate<vec::IntoIter<Call>>,
    context: Option<Context>,
    pending: VecDeque<Action>,
    done: bool,
}

impl<'a> ActionStream<'a> {
    pub(crate) fn new(registry: &'a VerbRegistry, chain: CallChain) -> Self {
        Self {
            registry,
            calls: chain.calls.into_iter().enumerate(),
            context: None,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// The context the next verb would receive.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    fn dispatch(&mut self, position: usize, call: Call) -> Result<(), InterpretError> {
        let Call { name, args } = call;
        let Some(handler) = self.registry.handler(&name) else {
            return Err(InterpretError::UnknownVerb {
                verb: name,
                position,
            });
        };

        tracing::debug!(verb = %name, position, "dispatching");
        let args = coerce_args(&args, self.registry);
        let outcome = handler
            .call(args, self.context.as_ref())
            .map_err(|source| InterpretError::Verb {
                verb: name.clone(),
                source,
            })?;

        match outcome {
            Outcome::Action(action) => {
                self.context = Some(Context::Action(action.clone()));
                self.pending.push_back(action);
            }
            Outcome::WithContext(action, context) => {
                self.context = Some(context);
                self.pending.push_back(action);
            }
            Outcome::Actions(actions) => {
                if let Some(last) = actions.last() {
                    self.context = Some(Context::Action(last.clone()));
                }
                self.pending.extend(actions);
            }
        }
        Ok(())
    }
}

impl Iterator for ActionStream<'_> {
    type Item = Result<Action, InterpretError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(action) = self.pending.pop_front() {
                return Some(Ok(action));
            }
            if self.done {
                return None;
            }
            let Some((position, call)) = self.calls.next() else {
                self.done = true;
                return None;
            };
            if let Err(err) = self.dispatch(position, call) {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for ActionStream<'_> {}
