//! Capability dispatch: which operation set a value exposes
//!
//! A value is sequence-shaped when it is a JSON array. Everything else,
//! including null and scalars, is mapping-shaped.
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Shape of a value, the sole branch point for operation availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Keyed mapping operations
    Mapping,
    /// Ordered sequence operations
    Sequence,
}

/// Every operation a chain or bound view can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Get,
    GetIn,
    Set,
    SetIn,
    Remove,
    RemoveIn,
    Merge,
    MergeDeep,
    Map,
    Filter,
    ToArray,
    Pick,
    Omit,
    ToObject,
    GroupBy,
}

const MAPPING_OPERATIONS: &[Operation] = &[
    Operation::Get,
    Operation::GetIn,
    Operation::Set,
    Operation::SetIn,
    Operation::Remove,
    Operation::RemoveIn,
    Operation::Merge,
    Operation::MergeDeep,
    Operation::Map,
    Operation::Filter,
    Operation::ToArray,
    Operation::Pick,
    Operation::Omit,
];

const SEQUENCE_OPERATIONS: &[Operation] = &[Operation::ToObject, Operation::GroupBy];

/// Classify a value
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Array(_) => Shape::Sequence,
        _ => Shape::Mapping,
    }
}

impl Shape {
    /// Shape of `value`
    pub fn of(value: &Value) -> Self {
        classify(value)
    }

    /// Operations exposed for this shape
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Shape::Mapping => MAPPING_OPERATIONS,
            Shape::Sequence => SEQUENCE_OPERATIONS,
        }
    }

    pub fn supports(self, operation: Operation) -> bool {
        operation.shape() == self
    }
}

impl Operation {
    /// The shape whose operation set contains this operation
    pub fn shape(self) -> Shape {
        match self {
            Operation::ToObject | Operation::GroupBy => Shape::Sequence,
            _ => Shape::Mapping,
        }
    }

    /// Method name as exposed on `Chain`
    pub fn name(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::GetIn => "get_in",
            Operation::Set => "set",
            Operation::SetIn => "set_in",
            Operation::Remove => "remove",
            Operation::RemoveIn => "remove_in",
            Operation::Merge => "merge",
            Operation::MergeDeep => "merge_deep",
            Operation::Map => "map",
            Operation::Filter => "filter",
            Operation::ToArray => "to_array",
            Operation::Pick => "pick",
            Operation::Omit => "omit",
            Operation::ToObject => "to_object",
            Operation::GroupBy => "group_by",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Mapping => write!(f, "mapping"),
            Shape::Sequence => write!(f, "sequence"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
