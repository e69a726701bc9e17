//! Conversions from an ordered sequence into keyed mappings
//!
//! Copyright (c) 2025 Chainable Team
//! Licensed under the Apache-2.0 license

use super::mapping::Mapping;
use crate::accessor::{key_string, Accessor};
use serde_json::Value;

/// Index `items` by `key`, storing each element
///
/// Elements producing the same key overwrite earlier ones.
pub fn to_object(items: &[Value], key: &Accessor) -> Mapping {
    let get_key = key.resolve();
    items
        .iter()
        .map(|item| (key_string(&get_key(item)), item.clone()))
        .collect()
}

/// Index `items` by `key`, storing `value` derived from each element
pub fn to_object_with(items: &[Value], key: &Accessor, value: &Accessor) -> Mapping {
    let get_key = key.resolve();
    let get_val = value.resolve();
    let mut results = Mapping::new();
    for item in items {
        results.insert(key_string(&get_key(item)), get_val(item));
    }
    results
}

/// Group `items` by `key` into sequences of elements
pub fn group_by(items: &[Value], key: &Accessor) -> Mapping {
    group(items, key, None)
}

/// Group `items` by `key` into sequences of `value` derived from each element
pub fn group_by_with(items: &[Value], key: &Accessor, value: &Accessor) -> Mapping {
    group(items, key, Some(value))
}

fn group(items: &[Value], key: &Accessor, value: Option<&Accessor>) -> Mapping {
    let get_key = key.resolve();
    let get_val = value.map(Accessor::resolve);
    let mut groups = Mapping::new();
    for item in items {
        let member = match &get_val {
            Some(get_val) => get_val(item),
            None => item.clone(),
        };
        let slot = groups
            .entry(key_string(&get_key(item)))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(members) = slot {
            members.push(member);
        }
    }
    groups
}
