use hashbrown::HashMap;
use serde::Serialize;

use super::Value;

/// Prefix of the synthesized names given to positional arguments.
pub const POSITIONAL_PREFIX: &str = "_positional_";

/// Name of the `index`-th positional argument (`_positional_<index>`).
pub fn positional_key(index: usize) -> String {
    format!("{POSITIONAL_PREFIX}{index}")
}

/// Whether `key` is in the positional namespace, well-formed or not.
pub fn is_positional_key(key: &str) -> bool {
    key.starts_with(POSITIONAL_PREFIX)
}

/// Decode the index of a positional argument name.
///
/// Returns `None` both for named arguments and for malformed positional
/// keys such as `_positional_x`.
pub fn parse_positional_index(key: &str) -> Option<usize> {
    key.strip_prefix(POSITIONAL_PREFIX)?.parse().ok()
}

/// One argument of a call: either written as `name=value` or a positional
/// value carrying a synthesized name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arg {
    pub name: String,
    pub value: Value,
}

impl Arg {
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn positional(index: usize, value: impl Into<Value>) -> Self {
        Self {
            name: positional_key(index),
            value: value.into(),
        }
    }
}

/// A single verb invocation: `name(args...)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub name: String,
    pub args: HashMap<String, Value>,
}

impl Call {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: HashMap::new(),
        }
    }

    pub fn from_args(name: impl Into<String>, args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(|arg| (arg.name, arg.value)).collect(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }
}

/// Calls joined by `.`, executed left to right.
///
/// Chains parsed from separate statements can be concatenated; the order of
/// calls is significant and is never changed by any operation here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallChain {
    pub calls: Vec<Call>,
}

impl CallChain {
    pub fn new(calls: Vec<Call>) -> Self {
        Self { calls }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Call> {
        self.calls.iter()
    }

    /// Append all calls of `other` after the calls of `self`.
    pub fn concat(mut self, other: CallChain) -> Self {
        self.calls.extend(other.calls);
        self
    }
}

impl IntoIterator for CallChain {
    type Item = Call;
    type IntoIter = std::vec::IntoIter<Call>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.into_iter()
    }
}

impl<'a> IntoIterator for &'a CallChain {
    type Item = &'a Call;
    type IntoIter = core::slice::Iter<'a, Call>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

impl FromIterator<Call> for CallChain {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        Self {
            calls: iter.into_iter().collect(),
        }
    }
}

impl Extend<Call> for CallChain {
    fn extend<I: IntoIterator<Item = Call>>(&mut self, iter: I) {
        self.calls.extend(iter);
    }
}
