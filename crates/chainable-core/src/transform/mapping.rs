//! Transformations over a single keyed mapping
//!
//! Every function borrows its input and returns a freshly built mapping.
//! Enumeration order is the mapping's insertion order.
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use crate::accessor::{Accessor, Entry};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A keyed mapping of string keys to JSON values
pub type Mapping = Map<String, Value>;

/// Shallow read of one key
pub fn get<'a>(source: &'a Mapping, key: &str) -> Option<&'a Value> {
    source.get(key)
}

/// Copy of `source` with `key` set to `value`
pub fn set(source: &Mapping, key: impl Into<String>, value: Value) -> Mapping {
    let mut result = source.clone();
    result.insert(key.into(), value);
    result
}

/// Copy of `source` without `key`
pub fn remove(source: &Mapping, key: &str) -> Mapping {
    source
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Shallow union, `data` wins on shared keys
pub fn merge(source: &Mapping, data: &Mapping) -> Mapping {
    let mut result = source.clone();
    for (key, value) in data {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Recursive union
///
/// Where both sides hold a mapping under the same key the two are merged,
/// otherwise the incoming value replaces the existing one.
pub fn merge_deep(source: &Mapping, data: &Mapping) -> Mapping {
    let mut result = source.clone();
    for (key, incoming) in data {
        let merged = match (result.get(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(merge_deep(existing, incoming))
            }
            _ => incoming.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

/// Same key set, each value replaced by `f(entry)`
pub fn map<F>(source: &Mapping, mut f: F) -> Mapping
where
    F: FnMut(Entry<'_>) -> Value,
{
    source
        .iter()
        .enumerate()
        .map(|(index, (key, value))| {
            let entry = Entry {
                value,
                key: key.as_str(),
                index,
                source,
            };
            (key.clone(), f(entry))
        })
        .collect()
}

/// Entries for which `predicate(entry)` holds
pub fn filter<F>(source: &Mapping, mut predicate: F) -> Mapping
where
    F: FnMut(Entry<'_>) -> bool,
{
    source
        .iter()
        .enumerate()
        .filter(|&(index, (key, value))| {
            predicate(Entry {
                value,
                key: key.as_str(),
                index,
                source,
            })
        })
        .map(|(_, (k, v))| (k.clone(), v.clone()))
        .collect()
}

/// The mapping's values in enumeration order
pub fn to_array(source: &Mapping) -> Vec<Value> {
    source.values().cloned().collect()
}

/// The mapping's values in enumeration order, each passed through `accessor`
pub fn to_array_with(source: &Mapping, accessor: &Accessor) -> Vec<Value> {
    let get_val = accessor.resolve();
    source.values().map(|value| get_val(value)).collect()
}

/// One element per entry, derived by `f(entry)` in enumeration order
pub fn to_array_by<F>(source: &Mapping, mut f: F) -> Vec<Value>
where
    F: FnMut(Entry<'_>) -> Value,
{
    source
        .iter()
        .enumerate()
        .map(|(index, (key, value))| {
            f(Entry {
                value,
                key: key.as_str(),
                index,
                source,
            })
        })
        .collect()
}

/// Only the requested fields that exist in `source`, in request order
pub fn pick<K: AsRef<str>>(source: &Mapping, fields: &[K]) -> Mapping {
    let mut result = Mapping::new();
    for field in fields {
        let field = field.as_ref();
        if let Some(value) = source.get(field) {
            result.insert(field.to_string(), value.clone());
        }
    }
    result
}

/// Everything except the listed fields
pub fn omit<K: AsRef<str>>(source: &Mapping, fields: &[K]) -> Mapping {
    let omitted: HashSet<&str> = fields.iter().map(|field| field.as_ref()).collect();
    filter(source, |entry| !omitted.contains(entry.key))
}
