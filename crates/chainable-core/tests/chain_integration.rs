//! Integration tests for chaining across mapping and sequence shapes
//!
//! These exercise the public API end to end: every step is checked against
//! the equivalent direct library calls.


use chainable_core::transform::{mapping, sequence};
use chainable_core::{bind, chain, get_in, set_in, Accessor, Chain, Error, Operation, Path, Shape};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_to_object_with_key_and_value_fields() {
    let result = chain(json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]))
        .to_object_with("id", "name")
        .unwrap()
        .done();
    assert_eq!(result, json!({"1": "A", "2": "B"}));
}

#[test]
fn test_group_by_with_key_and_value_fields() {
    let result = chain(json!([
        {"s": "x", "v": 1},
        {"s": "y", "v": 2},
        {"s": "x", "v": 3}
    ]))
    .group_by_with("s", "v")
    .unwrap()
    .done();
    assert_eq!(result, json!({"x": [1, 3], "y": [2]}));
}

#[test]
fn test_filter_admins() {
    let result = chain(json!({"1": {"admin": true}, "2": {"admin": false}}))
        .filter(|entry| entry.value["admin"] == json!(true))
        .unwrap()
        .done();
    assert_eq!(result, json!({"1": {"admin": true}}));
}

#[test]
fn test_set_in_leaves_original_untouched() {
    let original = json!({"a": {"b": 1}});
    let updated = chain(original.clone())
        .set_in(&["a", "c"], json!(9))
        .unwrap()
        .done();
    assert_eq!(updated, json!({"a": {"b": 1, "c": 9}}));
    assert_eq!(original, json!({"a": {"b": 1}}));
}

#[test]
fn test_merge_deep_scenario() {
    let patch = test_support::mapping_of(json!({"a": {"y": 9}}));
    let result = chain(json!({"a": {"x": 1, "y": 2}}))
        .merge_deep(&patch)
        .unwrap()
        .done();
    assert_eq!(result, json!({"a": {"x": 1, "y": 9}}));
}

#[test]
fn test_chain_matches_direct_calls() {
    let data = test_support::employees_by_id();
    let chained = chain(data.clone())
        .to_array()
        .and_then(|c| c.to_object("hr_id"))
        .unwrap()
        .done();

    let entries = test_support::mapping_of(data);
    let direct = sequence::to_object(&mapping::to_array(&entries), &"hr_id".into());
    assert_eq!(chained, Value::Object(direct));
    assert_eq!(test_support::keys_of(&chained), vec!["NICK", "JSHMO", "WHO"]);
}

#[test]
fn test_roster_groups_and_aliases() {
    let group_id = Accessor::func(|e| e["employeeData"]["groupId"].clone());
    let alias = Accessor::func(|e| e["employeeData"]["alias"].clone());

    let aliases_by_group = chain(test_support::roster())
        .group_by_with(group_id, alias)
        .unwrap()
        .done();
    assert_eq!(
        aliases_by_group,
        json!({
            "33": ["Butterfingers", "Sir Criesalot", "Tornado", "The Nameless"],
            "40": ["The Governess"]
        })
    );
}

#[test]
fn test_active_names_via_round_trip() {
    let names = chain(test_support::roster())
        .to_object("id")
        .and_then(|c| c.filter(|entry| entry.value["status"] == json!("active")))
        .and_then(|c| c.to_array_with("name"))
        .unwrap()
        .done();
    assert_eq!(
        names,
        json!(["Joe Shmoe", "Jane Doe", "Fred Marks", "Nick Coronado"])
    );
}

#[test]
fn test_unique_key_round_trip_preserves_elements() {
    let roster = test_support::items_of(test_support::roster());
    let restored = chain(Value::Array(roster.clone()))
        .to_object("id")
        .and_then(Chain::to_array)
        .unwrap()
        .done();
    assert_eq!(restored, Value::Array(roster));
}

#[test]
fn test_operation_surface_follows_shape() {
    let mapped = chain(test_support::employees_by_id());
    assert_eq!(mapped.operations(), Shape::Mapping.operations());
    assert!(!mapped.supports(Operation::GroupBy));

    let sequenced = mapped.to_array().unwrap();
    assert_eq!(sequenced.operations(), &[Operation::ToObject, Operation::GroupBy]);

    let err = sequenced.filter(|_| true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported operation: `filter` is not available on a sequence chain"
    );
}

#[test]
fn test_subject_is_shared_safely_between_chains() {
    let data = test_support::employees_by_id();
    let first = chain(data.clone()).remove("1").unwrap().done();
    let second = chain(data.clone()).pick(&["1"]).unwrap().done();

    assert_eq!(test_support::keys_of(&first), vec!["2", "3"]);
    assert_eq!(test_support::keys_of(&second), vec!["1"]);
    assert_eq!(data, test_support::employees_by_id());
}

#[test]
fn test_dotted_paths_drive_chain() {
    let path = Path::parse("1.birthdate.month").unwrap();
    let month = chain(test_support::employees_by_id())
        .get_in(path.as_slice())
        .unwrap()
        .done();
    assert_eq!(month, json!(1));

    let updated = set_in(&test_support::employees_by_id(), path.as_slice(), json!(2));
    assert_eq!(get_in(&updated, path.as_slice()), Some(&json!(2)));
}

#[test]
fn test_bound_ops_do_not_rewrap() {
    let data = test_support::employees_by_id();
    let month = bind(&data)
        .mapping()
        .and_then(|ops| ops.get_in(&["1", "birthdate", "month"]))
        .cloned();
    assert_eq!(month, Some(json!(1)));

    let roster = test_support::roster();
    let ops = bind(&roster).sequence().unwrap();
    let names = ops.to_object_with(&"id".into(), &"name".into());
    assert_eq!(names["5"], json!("Firstname Lastname"));
}

#[test]
fn test_invalid_path_is_reported() {
    assert!(matches!(Path::parse("1..month"), Err(Error::InvalidPath { .. })));
}
