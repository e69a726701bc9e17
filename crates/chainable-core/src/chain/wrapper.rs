//! Fluent chaining wrapper
//!
//! A [`Chain`] holds one value and exposes the operation set of that value's
//! shape. Each operation consumes the chain and returns a new one around the
//! result, re-classifying it, so a chain may alternate between mapping and
//! sequence operations any number of times before [`Chain::done`].
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use super::bound::{bind, MappingOps, Ops, SequenceOps};
use super::dispatch::{classify, Operation, Shape};
use crate::accessor::{Accessor, Entry};
use crate::config::{ChainOptions, ScalarPolicy};
use crate::transform::Mapping;
use crate::{Error, Result};
use serde_json::Value;

/// Start a chain with default options
pub fn chain(value: impl Into<Value>) -> Chain {
    Chain::new(value.into())
}

/// A value plus the operation set its shape exposes
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    value: Value,
    shape: Shape,
    options: ChainOptions,
}

impl Chain {
    /// Wrap `value` with default options
    ///
    /// The default scalar policy never rejects, so this cannot fail.
    pub fn new(value: Value) -> Self {
        let shape = classify(&value);
        Self {
            value,
            shape,
            options: ChainOptions::default(),
        }
    }

    /// Wrap `value` with explicit options
    pub fn with_options(value: Value, options: ChainOptions) -> Result<Self> {
        check_scalar(&value, options.scalar_policy)?;
        let shape = classify(&value);
        Ok(Self {
            value,
            shape,
            options,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn options(&self) -> ChainOptions {
        self.options
    }

    /// Operations callable on this step
    pub fn operations(&self) -> &'static [Operation] {
        self.shape.operations()
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.shape.supports(operation)
    }

    /// Borrow the wrapped value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Borrowed, non-chaining operation set for the wrapped value
    pub fn ops(&self) -> Ops<'_> {
        bind(&self.value)
    }

    /// Unwrap the current value
    pub fn done(self) -> Value {
        self.value
    }

    // Mapping operations

    pub fn get(self, key: &str) -> Result<Self> {
        let next = self
            .mapping_ops(Operation::Get)?
            .get(key)
            .cloned()
            .unwrap_or(Value::Null);
        self.advance(Operation::Get, next)
    }

    pub fn get_in<K: AsRef<str>>(self, path: &[K]) -> Result<Self> {
        let next = self
            .mapping_ops(Operation::GetIn)?
            .get_in(path)
            .cloned()
            .unwrap_or(Value::Null);
        self.advance(Operation::GetIn, next)
    }

    pub fn set(self, key: impl Into<String>, value: Value) -> Result<Self> {
        let next = self.mapping_ops(Operation::Set)?.set(key, value);
        self.advance(Operation::Set, Value::Object(next))
    }

    pub fn set_in<K: AsRef<str>>(self, path: &[K], value: Value) -> Result<Self> {
        let next = self.mapping_ops(Operation::SetIn)?.set_in(path, value);
        self.advance(Operation::SetIn, next)
    }

    pub fn remove(self, key: &str) -> Result<Self> {
        let next = self.mapping_ops(Operation::Remove)?.remove(key);
        self.advance(Operation::Remove, Value::Object(next))
    }

    pub fn remove_in<K: AsRef<str>>(self, path: &[K]) -> Result<Self> {
        let next = self.mapping_ops(Operation::RemoveIn)?.remove_in(path);
        self.advance(Operation::RemoveIn, next)
    }

    pub fn merge(self, data: &Mapping) -> Result<Self> {
        let next = self.mapping_ops(Operation::Merge)?.merge(data);
        self.advance(Operation::Merge, Value::Object(next))
    }

    pub fn merge_deep(self, data: &Mapping) -> Result<Self> {
        let next = self.mapping_ops(Operation::MergeDeep)?.merge_deep(data);
        self.advance(Operation::MergeDeep, Value::Object(next))
    }

    pub fn map<F>(self, f: F) -> Result<Self>
    where
        F: FnMut(Entry<'_>) -> Value,
    {
        let next = self.mapping_ops(Operation::Map)?.map(f);
        self.advance(Operation::Map, Value::Object(next))
    }

    pub fn filter<F>(self, predicate: F) -> Result<Self>
    where
        F: FnMut(Entry<'_>) -> bool,
    {
        let next = self.mapping_ops(Operation::Filter)?.filter(predicate);
        self.advance(Operation::Filter, Value::Object(next))
    }

    pub fn to_array(self) -> Result<Self> {
        let next = self.mapping_ops(Operation::ToArray)?.to_array();
        self.advance(Operation::ToArray, Value::Array(next))
    }

    pub fn to_array_with(self, accessor: impl Into<Accessor>) -> Result<Self> {
        let accessor = accessor.into();
        let next = self.mapping_ops(Operation::ToArray)?.to_array_with(&accessor);
        self.advance(Operation::ToArray, Value::Array(next))
    }

    /// Convert to a sequence, deriving each element from its whole entry
    pub fn to_array_by<F>(self, f: F) -> Result<Self>
    where
        F: FnMut(Entry<'_>) -> Value,
    {
        let next = self.mapping_ops(Operation::ToArray)?.to_array_by(f);
        self.advance(Operation::ToArray, Value::Array(next))
    }

    pub fn pick<K: AsRef<str>>(self, fields: &[K]) -> Result<Self> {
        let next = self.mapping_ops(Operation::Pick)?.pick(fields);
        self.advance(Operation::Pick, Value::Object(next))
    }

    pub fn omit<K: AsRef<str>>(self, fields: &[K]) -> Result<Self> {
        let next = self.mapping_ops(Operation::Omit)?.omit(fields);
        self.advance(Operation::Omit, Value::Object(next))
    }

    // Sequence operations

    pub fn to_object(self, key: impl Into<Accessor>) -> Result<Self> {
        let key = key.into();
        let next = self.sequence_ops(Operation::ToObject)?.to_object(&key);
        self.advance(Operation::ToObject, Value::Object(next))
    }

    pub fn to_object_with(
        self,
        key: impl Into<Accessor>,
        value: impl Into<Accessor>,
    ) -> Result<Self> {
        let (key, value) = (key.into(), value.into());
        let next = self
            .sequence_ops(Operation::ToObject)?
            .to_object_with(&key, &value);
        self.advance(Operation::ToObject, Value::Object(next))
    }

    pub fn group_by(self, key: impl Into<Accessor>) -> Result<Self> {
        let key = key.into();
        let next = self.sequence_ops(Operation::GroupBy)?.group_by(&key);
        self.advance(Operation::GroupBy, Value::Object(next))
    }

    pub fn group_by_with(
        self,
        key: impl Into<Accessor>,
        value: impl Into<Accessor>,
    ) -> Result<Self> {
        let (key, value) = (key.into(), value.into());
        let next = self
            .sequence_ops(Operation::GroupBy)?
            .group_by_with(&key, &value);
        self.advance(Operation::GroupBy, Value::Object(next))
    }

    fn mapping_ops(&self, operation: Operation) -> Result<MappingOps<'_>> {
        bind(&self.value)
            .mapping()
            .ok_or_else(|| self.unsupported(operation))
    }

    fn sequence_ops(&self, operation: Operation) -> Result<SequenceOps<'_>> {
        bind(&self.value)
            .sequence()
            .ok_or_else(|| self.unsupported(operation))
    }

    fn unsupported(&self, operation: Operation) -> Error {
        Error::UnsupportedOperation {
            operation,
            shape: self.shape,
        }
    }

    /// Re-wrap `next`, recomputing the exposed operation set
    fn advance(self, operation: Operation, next: Value) -> Result<Self> {
        let chained = Chain::with_options(next, self.options)?;
        tracing::trace!(
            operation = %operation,
            from = %self.shape,
            to = %chained.shape,
            "chain step"
        );
        Ok(chained)
    }
}

impl From<Value> for Chain {
    fn from(value: Value) -> Self {
        Chain::new(value)
    }
}

fn check_scalar(value: &Value, policy: ScalarPolicy) -> Result<()> {
    if policy == ScalarPolicy::Reject && !(value.is_object() || value.is_array()) {
        return Err(Error::ScalarRejected {
            message: "chain subject must be a mapping or a sequence".to_string(),
            found: value.to_string(),
        });
    }
    Ok(())
}
