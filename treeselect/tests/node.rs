mod common;

use treeselect::node::{find_by_id, find_by_value, from_json, load_json, validate, walk};
use treeselect::{TreeError, TreeNode};

use common::tech_tree;

#[test]
fn test_walk_is_pre_order() {
    let tree = tech_tree();
    let ids: Vec<&str> = walk(&tree).map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "1", "1-1", "1-1-1", "1-1-2", "1-1-3", "1-2", "1-2-1", "1-2-2", "1-3", "2", "2-1",
            "2-1-1", "2-2"
        ]
    );
}

#[test]
fn test_find() {
    let tree = tech_tree();
    assert_eq!(find_by_id(&tree, "1-2-1").map(|n| n.label.as_str()), Some("Vue 3"));
    assert_eq!(find_by_value(&tree, "nodejs").map(|n| n.id.as_str()), Some("2-1"));
    assert!(find_by_id(&tree, "9").is_none());
}

#[test]
fn test_missing_children_is_a_leaf() {
    let json = r#"[
        {"id": "1", "label": "Database", "value": "database", "children": [
            {"id": "1-1", "label": "MySQL", "value": "mysql"},
            {"id": "1-2", "label": "Redis", "value": "redis", "disabled": true}
        ]}
    ]"#;
    let tree = from_json(json).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree[0].has_children());
    assert!(!tree[0].children[0].has_children());
    assert!(tree[0].children[1].disabled);
    assert!(validate(&tree).is_ok());
}

#[test]
fn test_serialize_omits_defaults() {
    let node = TreeNode::new("1", "Docker", "docker");
    let json = serde_json::to_string(&node).unwrap();
    assert_eq!(json, r#"{"id":"1","label":"Docker","value":"docker"}"#);
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let tree = vec![
        TreeNode::new("1", "A", "a").child(TreeNode::new("1", "B", "b")),
    ];
    match validate(&tree) {
        Err(TreeError::DuplicateId { id }) => assert_eq!(id, "1"),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_empty_ids() {
    let tree = vec![TreeNode::new("", "Nameless", "x")];
    let err = validate(&tree).unwrap_err();
    assert_eq!(err.to_string(), "node 'Nameless' has an empty id");
}

#[test]
fn test_parse_error() {
    let err = from_json("{not json").unwrap_err();
    assert!(matches!(err, TreeError::Parse(_)));
}

#[test]
fn test_load_missing_file() {
    let err = load_json("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, TreeError::Io(_)));
}

#[test]
fn test_leaf_builder_uses_value_as_id() {
    let node = TreeNode::leaf("Kubernetes", "kubernetes");
    assert_eq!(node.id, "kubernetes");
    assert_eq!(node.value, "kubernetes");
}
