use serde_json::Value as JsonValue;

use crate::runtime::Action;

/// State handed from one verb to the next within a single chain.
///
/// By default it is the last action the previous verb produced; a verb can
/// replace it with anything else through [`Outcome::WithContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Context {
    Action(Action),
    Data(JsonValue),
}

impl Context {
    pub fn as_action(&self) -> Option<&Action> {
        match self {
            Context::Action(action) => Some(action),
            Context::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&JsonValue> {
        match self {
            Context::Data(data) => Some(data),
            Context::Action(_) => None,
        }
    }
}

impl From<Action> for Context {
    fn from(action: Action) -> Self {
        Context::Action(action)
    }
}

impl From<JsonValue> for Context {
    fn from(data: JsonValue) -> Self {
        Context::Data(data)
    }
}

/// What a verb hands back to the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// One action, which also becomes the next context.
    Action(Action),
    /// One action plus an explicit context for the next verb.
    WithContext(Action, Context),
    /// Zero or more actions; the last one (if any) becomes the next context.
    Actions(Vec<Action>),
}

impl Outcome {
    /// An outcome that produces nothing and leaves the context alone.
    pub fn none() -> Self {
        Outcome::Actions(Vec::new())
    }

    pub fn actions(&self) -> &[Action] {
        match self {
            Outcome::Action(action) | Outcome::WithContext(action, _) => {
                core::slice::from_ref(action)
            }
            Outcome::Actions(actions) => actions,
        }
    }
}

impl From<Action> for Outcome {
    fn from(action: Action) -> Self {
        Outcome::Action(action)
    }
}

impl From<(Action, Context)> for Outcome {
    fn from((action, context): (Action, Context)) -> Self {
        Outcome::WithContext(action, context)
    }
}

impl From<Vec<Action>> for Outcome {
    fn from(actions: Vec<Action>) -> Self {
        Outcome::Actions(actions)
    }
}
