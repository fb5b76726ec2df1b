//! Search, visibility and auto-expansion over an option tree.
//!
//! The per-node functions [`is_match`], [`has_matching_descendant`] and
//! [`is_visible`] define what the filter means. They re-walk subtrees and
//! are quadratic over a whole tree, so rendering goes through
//! [`SearchIndex`], which computes the same answers for every node in a
//! single bottom-up pass and is rebuilt only when the tree or the term
//! changes.

mod filter;

use std::collections::{HashMap, HashSet};

pub use filter::{LabelMatcher, MatchMode};

use crate::node::TreeNode;

/// True if `term` is empty or the label contains it, ignoring case.
pub fn is_match(node: &TreeNode, term: &str) -> bool {
    term.is_empty() || node.label.to_lowercase().contains(&term.to_lowercase())
}

/// True if `term` is non-empty and some strict descendant matches it.
pub fn has_matching_descendant(node: &TreeNode, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    node.children
        .iter()
        .any(|child| is_match(child, term) || has_matching_descendant(child, term))
}

/// True if the node should be rendered under `term`.
pub fn is_visible(node: &TreeNode, term: &str) -> bool {
    term.is_empty() || is_match(node, term) || has_matching_descendant(node, term)
}

/// Match and visibility for one node under the current term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeFlags {
    /// The node's own label matches the term.
    pub is_match: bool,
    /// The node matches or has a matching descendant.
    pub visible: bool,
}

impl NodeFlags {
    const UNFILTERED: Self = Self {
        is_match: true,
        visible: true,
    };
}

/// Cached search results for one (tree, term) pair.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    term: String,
    mode: MatchMode,
    flags: HashMap<String, NodeFlags>,
    expanded: HashSet<String>,
    match_count: usize,
    active: bool,
}

impl SearchIndex {
    /// Compute flags and the auto-expansion set in one pass.
    pub fn build(roots: &[TreeNode], term: &str, mode: MatchMode) -> Self {
        let mut index = Self {
            term: term.to_string(),
            mode,
            ..Default::default()
        };
        let mut matcher = LabelMatcher::new(term, mode);
        if matcher.is_empty() {
            return index;
        }
        index.active = true;

        for root in roots {
            index.visit(root, &mut matcher);
        }

        log::debug!(
            "search index built: term={:?} mode={:?} matches={} expanded={}",
            index.term,
            index.mode,
            index.match_count,
            index.expanded.len()
        );
        index
    }

    /// Returns whether the node is relevant (matches or has a relevant child).
    fn visit(&mut self, node: &TreeNode, matcher: &mut LabelMatcher) -> bool {
        // Children first: every child must be visited, so no short-circuit.
        let mut child_relevant = false;
        for child in &node.children {
            child_relevant |= self.visit(child, matcher);
        }

        let is_match = matcher.matches(&node.label);
        let relevant = is_match || child_relevant;
        if is_match {
            self.match_count += 1;
        }
        if relevant && node.has_children() {
            self.expanded.insert(node.id.clone());
        }

        // Repeated ids are tolerated by merging their flags.
        self.flags
            .entry(node.id.clone())
            .and_modify(|f| {
                f.is_match |= is_match;
                f.visible |= relevant;
            })
            .or_insert(NodeFlags {
                is_match,
                visible: relevant,
            });

        relevant
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether the term is filtering the tree. False for the empty term
    /// and for fuzzy terms with nothing to match (only whitespace).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flags for a node id. With no active term every node is visible.
    pub fn flags(&self, id: &str) -> NodeFlags {
        if !self.is_active() {
            return NodeFlags::UNFILTERED;
        }
        self.flags.get(id).copied().unwrap_or(NodeFlags {
            is_match: false,
            visible: false,
        })
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.flags(id).visible
    }

    pub fn is_match(&self, id: &str) -> bool {
        self.flags(id).is_match
    }

    /// Ids of every node with children that is, or contains, a match.
    ///
    /// Empty when no term is active.
    pub fn auto_expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Number of nodes whose own label matches.
    pub fn match_count(&self) -> usize {
        self.match_count
    }
}
