mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use treeselect::node::{find_by_value, walk};
use treeselect::selection::{clear, derive_labels, derive_selected, remove_item, select};
use treeselect::{Selection, SelectionMode, TreeNode};

use common::{forest, tech_tree};

fn node(tree: &[TreeNode], value: &str) -> TreeNode {
    find_by_value(tree, value).cloned().unwrap()
}

#[test]
fn test_single_select_then_clear() {
    let tree = tech_tree();
    let empty = Selection::empty(SelectionMode::Single);
    let selected = select(&empty, &node(&tree, "react")).unwrap();
    assert_eq!(selected, Selection::single("react"));
    assert_eq!(clear(&selected), Some(Selection::Single(None)));
}

#[test]
fn test_single_select_replaces() {
    let tree = tech_tree();
    let first = select(&Selection::Single(None), &node(&tree, "react")).unwrap();
    let second = select(&first, &node(&tree, "vue")).unwrap();
    assert_eq!(second, Selection::single("vue"));
}

#[test]
fn test_multiple_select_appends_and_toggles() {
    let tree = tech_tree();
    let current = Selection::multiple(["vue"]);
    let added = select(&current, &node(&tree, "react")).unwrap();
    assert_eq!(added, Selection::multiple(["vue", "react"]));
    let removed = select(&added, &node(&tree, "vue")).unwrap();
    assert_eq!(removed, Selection::multiple(["react"]));
}

#[test]
fn test_disabled_node_is_ignored() {
    let tree = tech_tree();
    let angular = node(&tree, "angular");
    assert!(angular.disabled);
    assert_eq!(select(&Selection::Single(None), &angular), None);
    assert_eq!(select(&Selection::multiple(["react"]), &angular), None);
}

#[test]
fn test_clear_on_empty_is_noop() {
    assert_eq!(clear(&Selection::Single(None)), None);
    assert_eq!(clear(&Selection::Multiple(vec![])), None);
    assert_eq!(
        clear(&Selection::multiple(["a", "b"])),
        Some(Selection::Multiple(vec![]))
    );
}

#[test]
fn test_remove_item() {
    let current = Selection::multiple(["react", "vue"]);
    assert_eq!(remove_item(&current, "vue"), Some(Selection::multiple(["react"])));
    assert_eq!(remove_item(&current, "angular"), None);
    assert_eq!(remove_item(&Selection::single("react"), "react"), None);
}

#[test]
fn test_remove_item_ignores_tree_membership() {
    // Values the tree does not know are still removable.
    let current = Selection::multiple(["ghost", "react"]);
    assert_eq!(remove_item(&current, "ghost"), Some(Selection::multiple(["react"])));
}

#[test]
fn test_labels_follow_document_order() {
    let tree = tech_tree();
    let selection = Selection::multiple(["express", "vue", "react-hooks", "frontend"]);
    assert_eq!(
        derive_labels(&tree, &selection),
        vec!["Frontend", "React Hooks", "Vue", "Express"]
    );
}

#[test]
fn test_unknown_values_contribute_nothing() {
    let tree = tech_tree();
    let selection = Selection::multiple(["nope", "redux"]);
    assert_eq!(derive_labels(&tree, &selection), vec!["Redux"]);
    assert!(derive_labels(&tree, &Selection::single("nope")).is_empty());
}

#[test]
fn test_shared_values_act_as_one_unit() {
    let tree = vec![
        TreeNode::new("a", "Docs", "shared"),
        TreeNode::new("b", "Documentation", "shared"),
    ];
    let items = derive_selected(&tree, &Selection::single("shared"));
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Docs", "Documentation"]);
}

#[test]
fn test_into_mode() {
    assert_eq!(
        Selection::multiple(["a", "b"]).into_mode(SelectionMode::Single),
        Selection::single("a")
    );
    assert_eq!(
        Selection::Single(None).into_mode(SelectionMode::Multiple),
        Selection::Multiple(vec![])
    );
}

#[test]
fn test_selection_serde_shape() {
    let single: Selection = serde_json::from_str("\"react\"").unwrap();
    assert_eq!(single, Selection::single("react"));
    let multiple: Selection = serde_json::from_str("[\"react\",\"vue\"]").unwrap();
    assert_eq!(multiple, Selection::multiple(["react", "vue"]));
    let none: Selection = serde_json::from_str("null").unwrap();
    assert_eq!(none, Selection::Single(None));
}

fn values(tree: &[TreeNode]) -> Vec<String> {
    walk(tree).map(|n| n.value.clone()).collect()
}

proptest! {
    #[test]
    fn labels_ignore_selection_order(tree in forest(), mask in prop::collection::vec(any::<bool>(), 64)) {
        let all = values(&tree);
        let picked: Vec<String> = all
            .iter()
            .zip(mask.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|(v, _)| v.clone())
            .collect();
        let mut reversed = picked.clone();
        reversed.reverse();

        let expected: Vec<String> = walk(&tree)
            .filter(|n| picked.contains(&n.value))
            .map(|n| n.label.clone())
            .collect();
        prop_assert_eq!(derive_labels(&tree, &Selection::Multiple(picked)), expected.clone());
        prop_assert_eq!(derive_labels(&tree, &Selection::Multiple(reversed)), expected);
    }

    #[test]
    fn multiple_select_is_its_own_inverse(
        tree in forest(),
        mask in prop::collection::vec(any::<bool>(), 64),
        pick in any::<prop::sample::Index>(),
    ) {
        let nodes: Vec<&TreeNode> = walk(&tree).filter(|n| !n.disabled).collect();
        prop_assume!(!nodes.is_empty());
        let target = nodes[pick.index(nodes.len())];

        let initial: Vec<String> = values(&tree)
            .into_iter()
            .zip(mask.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|(v, _)| v)
            .collect();
        let start = Selection::Multiple(initial);

        let once = select(&start, target).unwrap();
        prop_assert_ne!(once.contains(&target.value), start.contains(&target.value));
        let twice = select(&once, target).unwrap();

        let a: HashSet<&str> = start.as_set();
        let b: HashSet<&str> = twice.as_set();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn disabled_nodes_never_change_selection(tree in forest(), multiple in any::<bool>()) {
        let current = if multiple {
            Selection::multiple(values(&tree).into_iter().take(2))
        } else {
            Selection::Single(values(&tree).into_iter().next())
        };
        for node in walk(&tree).filter(|n| n.disabled) {
            prop_assert_eq!(select(&current, node), None);
        }
    }

    #[test]
    fn removing_absent_value_is_noop(tree in forest()) {
        let current = Selection::multiple(values(&tree).into_iter().step_by(2));
        prop_assert_eq!(remove_item(&current, "absent"), None);
    }
}
