//! Tests for path parsing and the generic resolver.
mod common;
use common::*;
use kumiki::path::{self, NodePath, PathSegment, ROOT_PATH};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_segments() {
    let path = NodePath::parse("actions.1.iterate.actions.0.print");
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Field("actions".to_string()),
            PathSegment::Index(1),
            PathSegment::Field("iterate".to_string()),
            PathSegment::Field("actions".to_string()),
            PathSegment::Index(0),
            PathSegment::Field("print".to_string()),
        ]
    );
    assert_eq!(path.to_string(), "actions.1.iterate.actions.0.print");
    assert_eq!(path.action_kind(), Some("print"));
}

#[test]
fn test_parse_only_plain_digits_as_indices() {
    let path = NodePath::parse("a.-1.+2.3x.07");
    assert_eq!(path.segments()[1], PathSegment::Field("-1".to_string()));
    assert_eq!(path.segments()[2], PathSegment::Field("+2".to_string()));
    assert_eq!(path.segments()[3], PathSegment::Field("3x".to_string()));
    assert_eq!(path.segments()[4], PathSegment::Index(7));
}

#[test]
fn test_parse_empty_is_root() {
    assert!(NodePath::parse("").is_empty());
    assert_eq!(NodePath::root().parent(), None);
    assert_eq!(
        NodePath::parse("actions.0.print").parent(),
        Some(NodePath::parse("actions.0"))
    );
}

#[test]
fn test_child_builders() {
    let path = NodePath::root()
        .child_field("actions")
        .child_index(2)
        .child_field("delay");
    assert_eq!(path.to_string(), "actions.2.delay");
    assert_eq!(path.len(), 3);
}

#[test]
fn test_removal_target_shapes() {
    let by_index = NodePath::parse("actions.1");
    let by_kind = NodePath::parse("actions.1.iterate");
    let nested = NodePath::parse("actions.1.iterate.actions.0");

    let (container, index) = by_index.removal_target().unwrap();
    assert_eq!(container, &[PathSegment::Field("actions".to_string())]);
    assert_eq!(index, 1);

    assert_eq!(by_kind.removal_target(), by_index.removal_target());

    let (container, index) = nested.removal_target().unwrap();
    assert_eq!(container.len(), 4);
    assert_eq!(index, 0);

    assert_eq!(NodePath::parse("name").removal_target(), None);
    assert_eq!(NodePath::parse("actions.0.print.message").removal_target(), None);
}

#[test]
fn test_resolve_nested_definition() {
    let doc = nested_test_json();
    assert_eq!(
        path::resolve(&doc, "actions.1.iterate.actions.0.print"),
        Some(&json!({ "message": "x" }))
    );
    assert_eq!(path::resolve(&doc, "name"), Some(&json!("t1")));
    assert_eq!(path::resolve(&doc, ROOT_PATH), Some(&doc));
}

#[test]
fn test_resolve_is_total() {
    let doc = nested_test_json();
    for candidate in [
        "",
        ".",
        "..",
        "no.such.path",
        "actions.99",
        "actions.0.print.message.length",
        "actions.-1",
        "actions.18446744073709551616",
        "name.0",
        "actions.0.0.0",
        "#.actions",
    ] {
        assert_eq!(path::resolve(&doc, candidate), None, "path {:?}", candidate);
    }
}

#[test]
fn test_update_replaces_action_value() {
    let mut doc = nested_test_json();
    let written = path::update(&mut doc, "actions.0.print", json!({ "message": "bye" }));
    assert!(written);
    assert_eq!(doc["actions"][0], json!({ "print": { "message": "bye" } }));
}

#[test]
fn test_update_keeps_key_order() {
    let mut doc = nested_test_json();
    path::update(&mut doc, "actions.1.iterate.condition", json!("i<10"));
    let keys: Vec<_> = doc["actions"][1]["iterate"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["condition", "actions"]);
}

#[test]
fn test_update_root_merges_fields() {
    let mut doc = nested_test_json();
    assert!(path::update(&mut doc, ROOT_PATH, json!({ "name": "renamed" })));
    assert_eq!(doc["name"], json!("renamed"));
    assert_eq!(doc["actions"].as_array().unwrap().len(), 2);

    assert!(!path::update(&mut doc, ROOT_PATH, json!("not a record")));
}

#[test]
fn test_update_does_not_create_containers() {
    let mut doc = nested_test_json();
    let original = doc.clone();
    assert!(!path::update(&mut doc, "", json!({})));
    assert!(!path::update(&mut doc, "actions.7.print", json!({})));
    assert!(!path::update(&mut doc, "missing.deeper.field", json!(1)));
    assert!(!path::update(&mut doc, "actions.5", json!({})));
    assert_eq!(doc, original);
}

#[test]
fn test_update_never_adds_keys() {
    let mut doc = json!({
        "name": "t1",
        "actions": [{ "print": { "message": "hi" } }]
    });
    let original = doc.clone();
    assert!(!path::update(&mut doc, "actions.0.delay", json!({ "milliseconds": 5 })));
    assert!(!path::update(&mut doc, "unknown", json!(1)));
    assert!(!path::update(&mut doc, "actions.0.print.level", json!("INFO")));
    assert_eq!(doc, original);
}

#[test]
fn test_remove_by_index_shifts_following_elements() {
    let mut doc = three_step_json();
    let next = doc["actions"][2].clone();

    let removed = path::remove_at(&mut doc, "actions.1");

    assert!(removed.unwrap().get("iterate").is_some());
    let actions = doc["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1], next);
}

#[test]
fn test_remove_dual_addressing_is_equivalent() {
    let mut by_index = three_step_json();
    let mut by_kind = three_step_json();

    path::remove_at(&mut by_index, "actions.1");
    path::remove_at(&mut by_kind, "actions.1.iterate");

    assert_eq!(by_index, by_kind);
}

#[test]
fn test_remove_inside_deep_nesting() {
    let mut doc = deeply_nested_json();
    path::remove_at(
        &mut doc,
        "actions.0.sequential.actions.0.iterate.actions.1.send",
    );
    let inner = path::resolve(&doc, "actions.0.sequential.actions.0.iterate.actions").unwrap();
    assert_eq!(inner, &json!([{ "print": { "message": "inner" } }]));
}

#[test]
fn test_remove_unresolvable_is_noop() {
    let mut doc = nested_test_json();
    let original = doc.clone();
    for candidate in ["", ROOT_PATH, "actions.9", "name", "actions.0.print.message", "nope.0"] {
        assert_eq!(path::remove_at(&mut doc, candidate), None, "path {:?}", candidate);
    }
    assert_eq!(doc, original);
}
