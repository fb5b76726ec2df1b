mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use treeselect::node::walk;
use treeselect::search::{has_matching_descendant, is_match, is_visible};
use treeselect::{MatchMode, SearchIndex, TreeNode};

use common::{forest, frontend_react, tech_tree, term, with_ancestors};

#[test]
fn test_empty_term_matches_and_shows_everything() {
    let tree = tech_tree();
    for node in walk(&tree) {
        assert!(is_match(node, ""));
        assert!(!has_matching_descendant(node, ""));
        assert!(is_visible(node, ""));
    }
    let index = SearchIndex::build(&tree, "", MatchMode::Substring);
    assert!(!index.is_active());
    assert!(index.auto_expanded().is_empty());
    assert!(index.is_visible("1-1-1"));
    assert!(index.is_visible("unknown"));
}

#[test]
fn test_match_is_case_insensitive_substring() {
    let node = TreeNode::new("x", "React Router", "rr");
    assert!(is_match(&node, "router"));
    assert!(is_match(&node, "CT RO"));
    assert!(!is_match(&node, "redux"));
}

#[test]
fn test_frontend_react_scenario() {
    let tree = frontend_react();
    let index = SearchIndex::build(&tree, "react", MatchMode::Substring);

    let visible: HashSet<&str> = walk(&tree)
        .filter(|n| index.is_visible(&n.id))
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(visible, HashSet::from(["Frontend", "React"]));

    let expected: HashSet<String> = HashSet::from(["1".to_string()]);
    assert_eq!(index.auto_expanded(), &expected);

    assert!(index.is_match("1-1"));
    assert!(!index.is_match("1"));
    assert!(index.is_visible("1"));
    assert_eq!(index.match_count(), 1);
}

#[test]
fn test_sibling_subtree_without_matches_is_pruned() {
    let tree = tech_tree();
    let index = SearchIndex::build(&tree, "vuex", MatchMode::Substring);
    assert!(index.is_visible("1"));
    assert!(index.is_visible("1-2"));
    assert!(index.is_visible("1-2-2"));
    assert!(!index.is_visible("1-1"));
    assert!(!index.is_visible("1-1-1"));
    assert!(!index.is_visible("2"));

    let expected: HashSet<String> = ["1", "1-2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(index.auto_expanded(), &expected);
}

#[test]
fn test_matching_branch_expands_itself() {
    // "React" matches and has children, so it is expanded too.
    let tree = tech_tree();
    let index = SearchIndex::build(&tree, "react", MatchMode::Substring);
    assert!(index.auto_expanded().contains("1"));
    assert!(index.auto_expanded().contains("1-1"));
    assert!(!index.is_visible("1-1-3"));
    assert!(index.is_visible("1-1-2"));
}

#[test]
fn test_leaf_match_expands_parent_not_leaf() {
    let tree = tech_tree();
    let index = SearchIndex::build(&tree, "express", MatchMode::Substring);
    assert!(index.auto_expanded().contains("2"));
    assert!(index.auto_expanded().contains("2-1"));
    assert!(!index.auto_expanded().contains("2-1-1"));
}

#[test]
fn test_fuzzy_mode() {
    let tree = tech_tree();
    let index = SearchIndex::build(&tree, "nodjs", MatchMode::Fuzzy);
    assert!(index.is_match("2-1"));
    assert!(index.is_visible("2"));
    assert!(!index.is_visible("1"));
    assert_eq!(index.mode(), MatchMode::Fuzzy);
}

#[test]
fn test_no_matches_hides_everything() {
    let tree = tech_tree();
    let index = SearchIndex::build(&tree, "zzz", MatchMode::Substring);
    assert!(walk(&tree).all(|n| !index.is_visible(&n.id)));
    assert!(index.auto_expanded().is_empty());
    assert_eq!(index.match_count(), 0);
}

proptest! {
    #[test]
    fn index_agrees_with_per_node_rules(tree in forest(), term in term()) {
        let index = SearchIndex::build(&tree, &term, MatchMode::Substring);
        for node in walk(&tree) {
            prop_assert_eq!(index.is_match(&node.id), is_match(node, &term));
            prop_assert_eq!(index.is_visible(&node.id), is_visible(node, &term));
        }
    }

    #[test]
    fn every_match_is_revealed(tree in forest(), term in term()) {
        let index = SearchIndex::build(&tree, &term, MatchMode::Substring);
        for (node, ancestors) in with_ancestors(&tree) {
            if !is_match(node, &term) {
                continue;
            }
            prop_assert!(index.is_visible(&node.id));
            for id in &ancestors {
                prop_assert!(index.is_visible(id));
                if !term.is_empty() {
                    prop_assert!(index.auto_expanded().contains(id));
                }
            }
        }
    }

    #[test]
    fn only_branches_are_auto_expanded(tree in forest(), term in term()) {
        let index = SearchIndex::build(&tree, &term, MatchMode::Substring);
        for node in walk(&tree) {
            if index.auto_expanded().contains(&node.id) {
                prop_assert!(node.has_children());
                prop_assert!(index.is_visible(&node.id));
            }
        }
    }
}
