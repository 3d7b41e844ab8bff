use core::fmt;

use serde::Serialize;

/// The tag of a [`Value`], as reported by [`Value::kind`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    String,
    Bool,
    Identifier,
    Function,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Identifier => "identifier",
            ValueKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// Numeric literal payload.
///
/// Literals without a fractional part that fit in an `i64` are `Int`,
/// everything else is `Float`.
#[derive(Copy, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "Int({value})"),
            Number::Float(value) => write!(f, "Float({value})"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A literal argument value as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Number(Number),
    String(String),
    Bool(bool),
    Identifier(String),
    /// `@name`: a reference to another verb, resolved during coercion.
    Function(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::Identifier(_) => ValueKind::Identifier,
            Value::Function(_) => ValueKind::Function,
        }
    }

    pub fn int(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Value::Identifier(name.into())
    }

    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    /// The textual payload of string-like values (strings, identifiers and
    /// function references).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Identifier(s) | Value::Function(s) => Some(s),
            Value::Number(_) | Value::Bool(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}
