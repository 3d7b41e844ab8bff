use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Payload of an [`Action`]: free-form, shaped by whoever writes the verbs.
pub type Payload = Map<String, JsonValue>;

/// A unit of work produced by a verb and performed by a [`Runtime`].
///
/// [`Runtime`]: super::Runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: String,
    #[serde(default)]
    pub payload: Payload,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Payload::new(),
        }
    }

    /// Add (or replace) one payload entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.payload.get(key)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        match serde_json::to_string(&self.payload) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self.payload),
        }
    }
}
