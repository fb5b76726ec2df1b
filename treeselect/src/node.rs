//! Option tree nodes.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// A node in the option tree.
///
/// `id` identifies the node for expansion tracking and must be unique
/// within a tree. `value` is the token reported in the selection; nodes
/// sharing a value are treated as one selectable unit.
///
/// # Example
///
/// ```
/// use treeselect::TreeNode;
///
/// let tree = vec![
///     TreeNode::new("1", "Frontend", "fe")
///         .child(TreeNode::new("1-1", "React", "react"))
///         .child(TreeNode::new("1-2", "Angular", "angular").disabled()),
/// ];
/// assert!(tree[0].has_children());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            children: Vec::new(),
            disabled: false,
        }
    }

    /// Create a leaf whose id and value are both `value`.
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), label, value)
    }

    /// Replace the children of this node.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark the node as not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Iterate this node and its descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Depth-first, pre-order traversal over one or more trees.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Iterate a forest of roots in document order.
pub fn walk(roots: &[TreeNode]) -> PreOrder<'_> {
    PreOrder {
        stack: roots.iter().rev().collect(),
    }
}

/// Find the first node (in document order) with the given id.
pub fn find_by_id<'a>(roots: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    walk(roots).find(|n| n.id == id)
}

/// Find the first node (in document order) carrying the given value.
pub fn find_by_value<'a>(roots: &'a [TreeNode], value: &str) -> Option<&'a TreeNode> {
    walk(roots).find(|n| n.value == value)
}

/// Check that every id is non-empty and unique.
///
/// The widget itself tolerates malformed trees; this is for callers that
/// load data from outside and want to reject it early.
pub fn validate(roots: &[TreeNode]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for node in walk(roots) {
        if node.id.is_empty() {
            return Err(TreeError::EmptyId {
                label: node.label.clone(),
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId {
                id: node.id.clone(),
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of nodes.
pub fn from_json(json: &str) -> Result<Vec<TreeNode>, TreeError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON array of nodes from a file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<TreeNode>, TreeError> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}
