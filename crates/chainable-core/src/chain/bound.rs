//! Operation sets bound to a borrowed value
//!
//! [`bind`] classifies a value once and hands back the operation set for its
//! shape. Results are plain values; [`Chain`](super::Chain) builds on these
//! views and re-wraps each result.

use super::dispatch::{classify, Operation, Shape};
use crate::accessor::{Accessor, Entry};
use crate::path;
use crate::transform::{mapping, sequence, Mapping};
use serde_json::Value;
use std::borrow::Cow;

/// Shape-dispatched operations over a borrowed value
#[derive(Debug, Clone)]
pub enum Ops<'a> {
    Mapping(MappingOps<'a>),
    Sequence(SequenceOps<'a>),
}

/// Bind the operation set matching `value`'s shape
pub fn bind(value: &Value) -> Ops<'_> {
    match classify(value) {
        Shape::Sequence => Ops::Sequence(SequenceOps {
            items: value.as_array().map(Vec::as_slice).unwrap_or_default(),
        }),
        Shape::Mapping => Ops::Mapping(MappingOps::new(value)),
    }
}

impl<'a> Ops<'a> {
    pub fn shape(&self) -> Shape {
        match self {
            Ops::Mapping(_) => Shape::Mapping,
            Ops::Sequence(_) => Shape::Sequence,
        }
    }

    pub fn operations(&self) -> &'static [Operation] {
        self.shape().operations()
    }

    /// The mapping operation set, if the value is mapping-shaped
    pub fn mapping(self) -> Option<MappingOps<'a>> {
        match self {
            Ops::Mapping(ops) => Some(ops),
            Ops::Sequence(_) => None,
        }
    }

    /// The sequence operation set, if the value is sequence-shaped
    pub fn sequence(self) -> Option<SequenceOps<'a>> {
        match self {
            Ops::Sequence(ops) => Some(ops),
            Ops::Mapping(_) => None,
        }
    }
}

/// Keyed mapping operations
///
/// A null or scalar subject reads as an empty mapping.
#[derive(Debug, Clone)]
pub struct MappingOps<'a> {
    source: &'a Value,
    entries: Cow<'a, Mapping>,
}

impl<'a> MappingOps<'a> {
    fn new(source: &'a Value) -> Self {
        let entries = match source {
            Value::Object(map) => Cow::Borrowed(map),
            other => {
                log::debug!("reading non-mapping value {} as an empty mapping", other);
                Cow::Owned(Mapping::new())
            }
        };
        Self { source, entries }
    }

    /// The bound value as given
    pub fn value(&self) -> &'a Value {
        self.source
    }

    /// The bound value's entries
    pub fn entries(&self) -> &Mapping {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.source.as_object().and_then(|map| mapping::get(map, key))
    }

    pub fn get_in<K: AsRef<str>>(&self, path: &[K]) -> Option<&'a Value> {
        path::get_in(self.source, path)
    }

    pub fn set(&self, key: impl Into<String>, value: Value) -> Mapping {
        mapping::set(&self.entries, key, value)
    }

    pub fn set_in<K: AsRef<str>>(&self, path: &[K], value: Value) -> Value {
        path::set_in(self.source, path, value)
    }

    pub fn remove(&self, key: &str) -> Mapping {
        mapping::remove(&self.entries, key)
    }

    pub fn remove_in<K: AsRef<str>>(&self, path: &[K]) -> Value {
        path::remove_in(self.source, path)
    }

    pub fn merge(&self, data: &Mapping) -> Mapping {
        mapping::merge(&self.entries, data)
    }

    pub fn merge_deep(&self, data: &Mapping) -> Mapping {
        mapping::merge_deep(&self.entries, data)
    }

    pub fn map<F>(&self, f: F) -> Mapping
    where
        F: FnMut(Entry<'_>) -> Value,
    {
        mapping::map(&self.entries, f)
    }

    pub fn filter<F>(&self, predicate: F) -> Mapping
    where
        F: FnMut(Entry<'_>) -> bool,
    {
        mapping::filter(&self.entries, predicate)
    }

    pub fn to_array(&self) -> Vec<Value> {
        mapping::to_array(&self.entries)
    }

    pub fn to_array_with(&self, accessor: &Accessor) -> Vec<Value> {
        mapping::to_array_with(&self.entries, accessor)
    }

    pub fn to_array_by<F>(&self, f: F) -> Vec<Value>
    where
        F: FnMut(Entry<'_>) -> Value,
    {
        mapping::to_array_by(&self.entries, f)
    }

    pub fn pick<K: AsRef<str>>(&self, fields: &[K]) -> Mapping {
        mapping::pick(&self.entries, fields)
    }

    pub fn omit<K: AsRef<str>>(&self, fields: &[K]) -> Mapping {
        mapping::omit(&self.entries, fields)
    }
}

/// Ordered sequence operations
#[derive(Debug, Clone, Copy)]
pub struct SequenceOps<'a> {
    items: &'a [Value],
}

impl<'a> SequenceOps<'a> {
    pub fn items(&self) -> &'a [Value] {
        self.items
    }

    pub fn to_object(&self, key: &Accessor) -> Mapping {
        sequence::to_object(self.items, key)
    }

    pub fn to_object_with(&self, key: &Accessor, value: &Accessor) -> Mapping {
        sequence::to_object_with(self.items, key, value)
    }

    pub fn group_by(&self, key: &Accessor) -> Mapping {
        sequence::group_by(self.items, key)
    }

    pub fn group_by_with(&self, key: &Accessor, value: &Accessor) -> Mapping {
        sequence::group_by_with(self.items, key, value)
    }
}
