//! Turning a call's literal arguments into what a verb receives.
//!
//! Positional arguments are rebuilt from their encoded index, never from the
//! iteration order of the argument map, and exposed under [`POSITIONAL`]:
//! a single value when there is one, a [`Native::List`] when there are more.
//! Named arguments keep their names.
//!
//! Two kinds of sloppy input are absorbed rather than reported:
//!
//! - a key in the positional namespace whose index does not parse is dropped;
//! - a `@name` reference to a verb that does not exist is passed on as the
//!   plain string `name`. Verbs that need a real function must check.
//!
//! A named argument literally called `_positional` shares the synthetic key.
//! Named arguments are inserted last, so the handler sees the named one; the
//! grammar author is expected to avoid that name.

use core::fmt;

use hashbrown::HashMap;
use serde_json::Value as JsonValue;

use crate::ast::{Number, Value, is_positional_key, parse_positional_index};
use crate::verbs::{BoundVerb, VerbError};

/// Key under which positional arguments are handed to verbs.
pub const POSITIONAL: &str = "_positional";

/// Looks up `@name` references.
pub trait FunctionResolver {
    fn resolve(&self, name: &str) -> Option<BoundVerb>;
}

/// Resolves nothing: every function reference stays a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFunctions;

impl FunctionResolver for NoFunctions {
    fn resolve(&self, _name: &str) -> Option<BoundVerb> {
        None
    }
}

/// An argument value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// A resolved `@name` reference.
    Verb(BoundVerb),
    /// Several positional arguments, in index order.
    List(Vec<Native>),
}

impl Native {
    pub fn type_name(&self) -> &'static str {
        match self {
            Native::Int(_) => "int",
            Native::Float(_) => "float",
            Native::Str(_) => "string",
            Native::Bool(_) => "bool",
            Native::Verb(_) => "verb",
            Native::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Native::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, with integers widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Native::Int(i) => Some(*i as f64),
            Native::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_verb(&self) -> Option<&BoundVerb> {
        match self {
            Native::Verb(verb) => Some(verb),
            _ => None,
        }
    }

    /// The name a function argument refers to, resolved or not.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Native::Verb(verb) => Some(verb.name()),
            Native::Str(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Int(i) => write!(f, "{i}"),
            Native::Float(x) => write!(f, "{x}"),
            Native::Str(s) => write!(f, "{s:?}"),
            Native::Bool(b) => write!(f, "{b}"),
            Native::Verb(verb) => write!(f, "@{}", verb.name()),
            Native::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&Native> for JsonValue {
    fn from(native: &Native) -> Self {
        match native {
            Native::Int(i) => JsonValue::from(*i),
            Native::Float(x) => JsonValue::from(*x),
            Native::Str(s) => JsonValue::from(s.as_str()),
            Native::Bool(b) => JsonValue::from(*b),
            Native::Verb(verb) => JsonValue::from(verb.name()),
            Native::List(items) => items.iter().map(JsonValue::from).collect(),
        }
    }
}

impl From<Native> for JsonValue {
    fn from(native: Native) -> Self {
        JsonValue::from(&native)
    }
}

/// Coerced arguments of one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: HashMap<String, Native>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional-only arguments, as a verb would receive `verb(a, b, ...)`.
    pub fn from_positional(values: impl IntoIterator<Item = Native>) -> Self {
        let mut args = Self::new();
        let mut values: Vec<Native> = values.into_iter().collect();
        match values.len() {
            0 => {}
            1 => {
                args.values.insert(POSITIONAL.to_string(), values.remove(0));
            }
            _ => {
                args.values
                    .insert(POSITIONAL.to_string(), Native::List(values));
            }
        }
        args
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Native) -> Option<Native> {
        self.values.insert(name.into(), value)
    }

    pub fn with(mut self, name: impl Into<String>, value: Native) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Native> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Native)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Positional values in order: empty, one, or many.
    pub fn positional(&self) -> &[Native] {
        match self.values.get(POSITIONAL) {
            None => &[],
            Some(Native::List(items)) => items,
            Some(value) => core::slice::from_ref(value),
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Native::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Native::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Native::as_float)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Native::as_bool)
    }

    pub fn required(&self, name: &str) -> Result<&Native, VerbError> {
        self.get(name).ok_or_else(|| VerbError::MissingArgument {
            name: name.to_string(),
        })
    }

    pub fn required_str(&self, name: &str) -> Result<&str, VerbError> {
        let value = self.required(name)?;
        value.as_str().ok_or_else(|| wrong_type(name, "a string", value))
    }

    pub fn required_float(&self, name: &str) -> Result<f64, VerbError> {
        let value = self.required(name)?;
        value.as_float().ok_or_else(|| wrong_type(name, "a number", value))
    }
}

fn wrong_type(name: &str, expected: &'static str, found: &Native) -> VerbError {
    VerbError::WrongType {
        name: name.to_string(),
        expected,
        found: found.type_name(),
    }
}

/// Coerce a call's arguments, resolving function references with `resolver`.
pub fn coerce_args<R>(args: &HashMap<String, Value>, resolver: &R) -> Args
where
    R: FunctionResolver + ?Sized,
{
    let mut positional: Vec<(usize, &str, &Value)> = Vec::new();
    let mut named: Vec<(&str, &Value)> = Vec::new();

    for (name, value) in args {
        if !is_positional_key(name) {
            named.push((name.as_str(), value));
            continue;
        }
        match parse_positional_index(name) {
            Some(index) => positional.push((index, name.as_str(), value)),
            None => tracing::trace!(key = %name, "dropping malformed positional argument"),
        }
    }

    // The key breaks ties between spellings of the same index ("_positional_1"
    // and "_positional_01") so the result never depends on map order.
    positional.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut coerced = Args::from_positional(
        positional
            .into_iter()
            .map(|(_, _, value)| coerce_value(value, resolver)),
    );
    for (name, value) in named {
        coerced.insert(name, coerce_value(value, resolver));
    }
    coerced
}

/// Coerce a single literal.
pub fn coerce_value<R>(value: &Value, resolver: &R) -> Native
where
    R: FunctionResolver + ?Sized,
{
    match value {
        Value::Number(Number::Int(i)) => Native::Int(*i),
        Value::Number(Number::Float(x)) => Native::Float(*x),
        Value::String(s) | Value::Identifier(s) => Native::Str(s.clone()),
        Value::Bool(b) => Native::Bool(*b),
        Value::Function(name) => match resolver.resolve(name) {
            Some(verb) => Native::Verb(verb),
            None => {
                tracing::trace!(function = %name, "unresolved function reference");
                Native::Str(name.clone())
            }
        },
    }
}
