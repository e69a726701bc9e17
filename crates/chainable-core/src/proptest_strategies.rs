//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for random JSON values, keyed
//! mappings and key paths, along with the crate-internal property tests
//! that use them.

#![cfg(test)]

use crate::transform::Mapping;
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating mapping keys
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

/// Strategy for generating JSON values with controlled depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        24, // max size
        4,  // items per collection
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..4).prop_map(Value::Array),
                hash_map(key_strategy(), inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for generating keyed mappings
pub fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    hash_map(key_strategy(), json_value_strategy(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

/// Strategy for generating non-empty key paths
pub fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    vec(key_strategy(), 1..4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{get_in, remove_in, set_in};
    use crate::transform::mapping;

    proptest! {
        #[test]
        fn prop_set_in_then_get_in_round_trips(
            source in mapping_strategy(),
            path in path_strategy(),
            value in json_value_strategy(),
        ) {
            let root = Value::Object(source);
            let updated = set_in(&root, &path, value.clone());
            prop_assert_eq!(get_in(&updated, &path), Some(&value));
        }

        #[test]
        fn prop_set_in_leaves_source_untouched(
            source in mapping_strategy(),
            path in path_strategy(),
            value in json_value_strategy(),
        ) {
            let root = Value::Object(source);
            let snapshot = root.clone();
            let _ = set_in(&root, &path, value);
            let _ = remove_in(&root, &path);
            prop_assert_eq!(root, snapshot);
        }

        #[test]
        fn prop_remove_missing_key_is_noop(source in mapping_strategy(), key in key_strategy()) {
            prop_assume!(!source.contains_key(&key));
            prop_assert_eq!(mapping::remove(&source, &key), source.clone());
            let root = Value::Object(source);
            prop_assert_eq!(remove_in(&root, &[key]), root.clone());
        }

        #[test]
        fn prop_remove_in_after_set_in_drops_leaf(
            source in mapping_strategy(),
            path in path_strategy(),
            value in json_value_strategy(),
        ) {
            let root = Value::Object(source);
            let removed = remove_in(&set_in(&root, &path, value), &path);
            prop_assert_eq!(get_in(&removed, &path), None);
        }

        #[test]
        fn prop_merge_keeps_every_key(source in mapping_strategy(), data in mapping_strategy()) {
            let merged = mapping::merge(&source, &data);
            for key in source.keys().chain(data.keys()) {
                prop_assert!(merged.contains_key(key));
            }
            for (key, value) in &data {
                prop_assert_eq!(&merged[key], value);
            }
        }

        #[test]
        fn prop_omit_is_negated_pick(source in mapping_strategy(), fields in vec(key_strategy(), 0..4)) {
            let picked = mapping::pick(&source, &fields);
            let omitted = mapping::omit(&source, &fields);
            prop_assert_eq!(picked.len() + omitted.len(), source.len());
            prop_assert!(picked.keys().all(|k| !omitted.contains_key(k)));
        }
    }
}
