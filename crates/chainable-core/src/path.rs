//! Deep get/set/remove through nested mappings
//!
//! Paths are ordered key lists. Traversal never fails: a missing or
//! non-traversable intermediate yields `None` on reads, a fresh empty mapping
//! on writes and a no-op on removals. Writes keep sequences they pass
//! through, copy only along the modified path and never touch their input.
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use crate::accessor::lookup;
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Read the value at `path`
///
/// An empty path returns `source` itself.
pub fn get_in<'a, K: AsRef<str>>(source: &'a Value, path: &[K]) -> Option<&'a Value> {
    path.iter()
        .try_fold(source, |current, key| lookup(current, key.as_ref()))
}

/// Return a copy of `source` with `value` stored at `path`
///
/// A sequence along the path keeps its shape when the key is one of
/// its indices, otherwise its elements carry over as index-keyed entries
/// of a new mapping. Missing intermediates, and scalar or null ones, are
/// replaced by empty mappings. An empty path returns `value`.
pub fn set_in<K: AsRef<str>>(source: &Value, path: &[K], value: Value) -> Value {
    let Some((key, rest)) = path.split_first() else {
        return value;
    };
    let key = key.as_ref();

    let updated = if rest.is_empty() {
        value
    } else {
        match lookup(source, key) {
            Some(child @ (Value::Object(_) | Value::Array(_))) => set_in(child, rest, value),
            Some(other) => {
                log::debug!(
                    "set_in: replacing non-mapping value {} at '{}' with an empty mapping",
                    other,
                    key
                );
                set_in(&Value::Object(Map::new()), rest, value)
            }
            None => set_in(&Value::Object(Map::new()), rest, value),
        }
    };

    match source {
        Value::Array(items) => match key.parse::<usize>() {
            Ok(index) if index < items.len() => {
                let mut items = items.clone();
                items[index] = updated;
                Value::Array(items)
            }
            _ => {
                let mut map = index_keyed(items);
                map.insert(key.to_string(), updated);
                Value::Object(map)
            }
        },
        _ => {
            let mut map = source.as_object().cloned().unwrap_or_default();
            map.insert(key.to_string(), updated);
            Value::Object(map)
        }
    }
}

fn index_keyed(items: &[Value]) -> Map<String, Value> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item.clone()))
        .collect()
}

/// Return a copy of `source` without the value at the end of `path`
///
/// If any key along the path is missing, or the path crosses a value that
/// is not a mapping, `source` is returned unchanged.
pub fn remove_in<K: AsRef<str>>(source: &Value, path: &[K]) -> Value {
    match remove_at(source, path) {
        Some(updated) => updated,
        None => source.clone(),
    }
}

// `None` signals "nothing removed" so untouched subtrees are never rebuilt.
fn remove_at<K: AsRef<str>>(source: &Value, path: &[K]) -> Option<Value> {
    let (key, rest) = path.split_first()?;
    let key = key.as_ref();
    let map = source.as_object()?;
    let child = map.get(key)?;

    if rest.is_empty() {
        let remaining = map
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        return Some(Value::Object(remaining));
    }

    let updated = remove_at(child, rest)?;
    let mut rebuilt = map.clone();
    rebuilt.insert(key.to_string(), updated);
    Some(Value::Object(rebuilt))
}

/// An ordered list of keys, parseable from dotted notation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create a path from its segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse dotted notation such as `"1.birthdate.month"`
    pub fn parse(path: &str) -> Result<Self> {
        path.parse()
    }

    /// The path's keys in traversal order
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extend the path by one key
    pub fn join(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Path::default());
        }
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidPath {
                path: s.to_string(),
                message: "empty path segment".to_string(),
            });
        }
        Ok(Path { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl AsRef<[String]> for Path {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path::new(iter)
    }
}
