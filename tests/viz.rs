//! Tests for the visualization tree projection.
mod common;
use common::*;
use kumiki::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn catalog_entity(document: serde_json::Value) -> TestVisualEntity {
    TestVisualEntity::builder()
        .document(document)
        .schema_provider(Arc::new(create_catalog()))
        .build()
}

#[test]
fn test_root_is_group_at_root_path() {
    let entity = TestVisualEntity::new(Some(sample_test_json()));
    let tree = entity.to_viz_node();
    let root = tree.root();

    assert!(root.is_root());
    assert!(root.is_group());
    assert_eq!(root.path(), ROOT_PATH);
    assert_eq!(root.parent(), None);
    assert_eq!(root.previous_node(), None);
    assert_eq!(root.next_node(), None);
    assert_eq!(root.node_label(NodeLabelType::Id), "sample-test");
}

#[test]
fn test_empty_test_has_only_root() {
    let entity = TestVisualEntity::new(None);
    let tree = entity.to_viz_node();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root().child_count(), 0);
}

#[test]
fn test_children_follow_document_order() {
    let entity = TestVisualEntity::new(Some(three_step_json()));
    let tree = entity.to_viz_node();

    assert_eq!(
        tree.paths(),
        vec![
            "#",
            "actions.0.print",
            "actions.1.iterate",
            "actions.1.iterate.actions.0.print",
            "actions.1.iterate.actions.1.delay",
            "actions.2.delay",
        ]
    );

    let children = tree.root().children();
    let labels: Vec<_> = children
        .iter()
        .map(|child| child.node_label(NodeLabelType::Id))
        .collect();
    assert_eq!(labels, vec!["print", "iterate", "delay"]);
    assert!(children.iter().all(|child| child.parent() == Some(tree.root())));
}

#[test]
fn test_sibling_links() {
    let entity = TestVisualEntity::new(Some(three_step_json()));
    let tree = entity.to_viz_node();
    let children = tree.root().children();
    let (print, iterate, delay) = (children[0], children[1], children[2]);

    assert_eq!(print.previous_node(), None);
    assert_eq!(print.next_node(), Some(iterate));
    assert_eq!(iterate.previous_node(), Some(print));
    assert_eq!(iterate.next_node(), Some(delay));
    assert_eq!(delay.previous_node(), Some(iterate));
    assert_eq!(delay.next_node(), None);

    // Sibling links never cross into another parent's children.
    let nested = iterate.children();
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].previous_node(), None);
    assert_eq!(nested[1].next_node(), None);
    assert_eq!(nested[0].next_node(), Some(nested[1]));
}

#[test]
fn test_containers_are_groups() {
    let entity = TestVisualEntity::new(Some(nested_test_json()));
    let tree = entity.to_viz_node();

    let iterate = tree.find("actions.1.iterate").unwrap();
    assert!(iterate.is_group());
    assert_eq!(iterate.child_count(), 1);
    assert_eq!(iterate.children()[0].path(), "actions.1.iterate.actions.0.print");

    let print = tree.find("actions.0.print").unwrap();
    assert!(!print.is_group());
    assert!(print.children().is_empty());
}

#[test]
fn test_child_paths_resolve_to_their_definitions() {
    let entity = TestVisualEntity::new(Some(deeply_nested_json()));
    let tree = entity.to_viz_node();
    for node in tree.iter().filter(|node| !node.is_root()) {
        let definition = entity.node_definition(Some(node.path()));
        assert_ne!(definition, Some(json!({})), "path {}", node.path());
        assert_eq!(
            entity.node_label(Some(node.path()), NodeLabelType::Id),
            node.node_label(NodeLabelType::Id)
        );
    }
}

#[test]
fn test_rebuild_is_deterministic() {
    let entity = TestVisualEntity::new(Some(deeply_nested_json()));
    let first = entity.to_viz_node();
    let second = entity.to_viz_node();
    assert_eq!(first, second);
    assert_eq!(first.paths(), second.paths());
}

#[test]
fn test_rebuild_reflects_removal() {
    let mut entity = TestVisualEntity::new(Some(three_step_json()));
    entity.remove_step(Some("actions.0.print"));
    let tree = entity.to_viz_node();
    assert_eq!(
        tree.paths(),
        vec![
            "#",
            "actions.0.iterate",
            "actions.0.iterate.actions.0.print",
            "actions.0.iterate.actions.1.delay",
            "actions.1.delay",
        ]
    );
}

#[test]
fn test_malformed_elements_become_unlabeled_leaves() {
    let entity = TestVisualEntity::new(Some(json!({
        "name": "broken",
        "actions": [
            { "print": { "message": "ok" } },
            "not a record",
            { "print": {}, "delay": {} },
            {}
        ]
    })));
    let tree = entity.to_viz_node();

    assert_eq!(
        tree.paths(),
        vec!["#", "actions.0.print", "actions.1", "actions.2", "actions.3"]
    );
    for path in ["actions.1", "actions.2", "actions.3"] {
        let node = tree.find(path).unwrap();
        assert!(!node.is_group());
        assert_eq!(node.node_label(NodeLabelType::Id), "");
    }
    assert_eq!(tree.find("actions.0.print").unwrap().next_node().unwrap().path(), "actions.1");
}

#[test]
fn test_description_labels() {
    let entity = TestVisualEntity::new(Some(json!({
        "name": "labelled",
        "description": "Root description",
        "actions": [
            { "print": { "description": "Say hello", "message": "hello" } },
            { "delay": { "milliseconds": 10 } }
        ]
    })));
    let tree = entity.to_viz_node();
    let root = tree.root();
    assert_eq!(root.node_label(NodeLabelType::Id), "labelled");
    assert_eq!(root.node_label(NodeLabelType::Description), "Root description");

    let children = root.children();
    assert_eq!(children[0].node_label(NodeLabelType::Description), "Say hello");
    assert_eq!(children[0].node_label(NodeLabelType::Id), "print");
    assert_eq!(children[1].node_label(NodeLabelType::Description), "delay");
}

#[test]
fn test_titles_come_from_catalog() {
    let entity = catalog_entity(three_step_json());
    let tree = entity.to_viz_node();

    let titles: Vec<_> = tree.iter().map(|node| node.title()).collect();
    assert_eq!(
        titles,
        vec!["test-1234", "Print", "Iterate", "Print", "Delay", "Delay"]
    );

    let unknown = catalog_entity(json!({
        "name": "unknown-kind",
        "actions": [{ "groovy": { "script": "println 'hi'" } }]
    }));
    let tree = unknown.to_viz_node();
    assert_eq!(tree.find("actions.0.groovy").unwrap().title(), "groovy");
}

#[test]
fn test_message_record() {
    let entity = TestVisualEntity::new(Some(deeply_nested_json()));
    let tree = entity.to_viz_node();

    let send = tree
        .find("actions.0.sequential.actions.0.iterate.actions.1.send")
        .unwrap();
    assert_eq!(send.message(), Some(&json!({ "body": { "data": "ping" } })));

    // A plain string message is a print parameter, not a message record.
    let print = send.previous_node().unwrap();
    assert_eq!(print.message(), None);
}

#[test]
fn test_node_lookup_by_id() {
    let entity = TestVisualEntity::new(Some(nested_test_json()));
    let tree = entity.to_viz_node();
    assert_eq!(tree.node(0), Some(tree.root()));
    assert_eq!(tree.node(tree.len()), None);
    let last = tree.node(tree.len() - 1).unwrap();
    assert_eq!(last.path(), "actions.1.iterate.actions.0.print");
    assert_eq!(last.data().label, "print");
}

#[test]
fn test_display() {
    let entity = TestVisualEntity::new(Some(three_step_json()));
    let expected = "\
test-1234 [#]
├── print [actions.0.print]
├── iterate (group) [actions.1.iterate]
│   ├── print [actions.1.iterate.actions.0.print]
│   └── delay [actions.1.iterate.actions.1.delay]
└── delay [actions.2.delay]
";
    assert_eq!(entity.to_viz_node().to_string(), expected);
}

#[test]
fn test_display_marks_unknown_nodes() {
    let entity = TestVisualEntity::new(Some(json!({
        "name": "broken",
        "actions": [42]
    })));
    assert_eq!(
        entity.to_viz_node().to_string(),
        "broken [#]\n└── <unknown> [actions.0]\n"
    );
}
