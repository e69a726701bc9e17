//! Accessors: literal field names or derivation functions
//!
//! Every operation that takes "a key" or "a value getter" accepts an
//! [`Accessor`]. A field accessor looks the name up on the element, a
//! function accessor derives an arbitrary value from it. Both are resolved to
//! a single callable once per operation call via [`Accessor::resolve`].
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A function deriving a value from an element
pub type ValueFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Literal field name or derivation function
#[derive(Clone)]
pub enum Accessor {
    /// Look up a field (or numeric index on sequences) on the element
    Field(String),
    /// Derive a value from the element
    Function(ValueFn),
}

impl Accessor {
    /// Create a field accessor
    pub fn field(name: impl Into<String>) -> Self {
        Accessor::Field(name.into())
    }

    /// Create a function accessor
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Accessor::Function(Arc::new(f))
    }

    /// Accessor returning the element unchanged
    pub fn identity() -> Self {
        Accessor::func(Value::clone)
    }

    /// Resolve to a single callable
    ///
    /// A missing field resolves to `Value::Null`.
    pub fn resolve(&self) -> Box<dyn Fn(&Value) -> Value + '_> {
        match self {
            Accessor::Field(name) => {
                Box::new(move |item: &Value| lookup(item, name).cloned().unwrap_or(Value::Null))
            }
            Accessor::Function(f) => Box::new(move |item: &Value| f(item)),
        }
    }

    /// Apply the accessor to one element
    pub fn apply(&self, item: &Value) -> Value {
        self.resolve()(item)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for Accessor {
    fn from(name: &str) -> Self {
        Accessor::Field(name.to_string())
    }
}

impl From<String> for Accessor {
    fn from(name: String) -> Self {
        Accessor::Field(name)
    }
}

impl From<&String> for Accessor {
    fn from(name: &String) -> Self {
        Accessor::Field(name.clone())
    }
}

impl From<ValueFn> for Accessor {
    fn from(f: ValueFn) -> Self {
        Accessor::Function(f)
    }
}

/// One mapping entry as seen by `map`/`filter` callbacks
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Value stored under `key`
    pub value: &'a Value,
    /// The entry's key
    pub key: &'a str,
    /// 0-based position in enumeration order
    pub index: usize,
    /// The whole mapping being traversed
    pub source: &'a Map<String, Value>,
}

/// Single lookup step: field on a mapping, numeric index on a sequence
pub fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Coerce a derived value into a mapping key
pub fn key_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
