//! Selection values and the operations that change them.
//!
//! The selection is owned by the caller. Every operation here takes the
//! caller's current snapshot and returns `Some(new)` when the selection
//! should change, or `None` when the operation is a no-op.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::node::{TreeNode, walk};

/// Selection cardinality, fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one value; selecting closes the overlay.
    #[default]
    Single,
    /// Any number of values; selecting toggles membership.
    Multiple,
}

/// The caller-owned selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl Selection {
    /// An empty selection for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn single(value: impl Into<String>) -> Self {
        Selection::Single(Some(value.into()))
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Selected values in the caller's order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Selection::Single(value) => value.iter().map(String::as_str).collect(),
            Selection::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Set view for membership tests while rendering.
    pub fn as_set(&self) -> HashSet<&str> {
        self.values().into_iter().collect()
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::Single(selected) => selected.as_deref() == Some(value),
            Selection::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_none(),
            Selection::Multiple(values) => values.is_empty(),
        }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(value) => usize::from(value.is_some()),
            Selection::Multiple(values) => values.len(),
        }
    }

    /// Coerce into `mode`, keeping what fits.
    ///
    /// A multiple selection narrowed to single keeps its first value.
    pub fn into_mode(self, mode: SelectionMode) -> Self {
        match (self, mode) {
            (s @ Selection::Single(_), SelectionMode::Single) => s,
            (s @ Selection::Multiple(_), SelectionMode::Multiple) => s,
            (Selection::Single(value), SelectionMode::Multiple) => {
                Selection::Multiple(value.into_iter().collect())
            }
            (Selection::Multiple(values), SelectionMode::Single) => {
                Selection::Single(values.into_iter().next())
            }
        }
    }
}

/// Select `node` against the current selection.
///
/// Disabled nodes never change the selection. In single mode the value
/// replaces whatever was selected; in multiple mode it is toggled, with
/// removals keeping the order of the rest and additions appended.
pub fn select(current: &Selection, node: &TreeNode) -> Option<Selection> {
    if node.disabled {
        log::debug!("ignoring selection of disabled node {:?}", node.id);
        return None;
    }
    let value = &node.value;
    let next = match current {
        Selection::Single(_) => Selection::Single(Some(value.clone())),
        Selection::Multiple(values) => {
            if values.iter().any(|v| v == value) {
                Selection::Multiple(values.iter().filter(|v| *v != value).cloned().collect())
            } else {
                let mut seen = HashSet::new();
                let mut next: Vec<String> = values
                    .iter()
                    .filter(|v| seen.insert(v.as_str()))
                    .cloned()
                    .collect();
                next.push(value.clone());
                Selection::Multiple(next)
            }
        }
    };
    Some(next)
}

/// Empty the selection. `None` if it is already empty.
pub fn clear(current: &Selection) -> Option<Selection> {
    if current.is_empty() {
        return None;
    }
    Some(Selection::empty(current.mode()))
}

/// Remove one value from a multiple selection.
///
/// `None` in single mode or when the value is not selected.
pub fn remove_item(current: &Selection, value: &str) -> Option<Selection> {
    match current {
        Selection::Single(_) => None,
        Selection::Multiple(values) => {
            if !values.iter().any(|v| v == value) {
                return None;
            }
            Some(Selection::Multiple(
                values.iter().filter(|v| *v != value).cloned().collect(),
            ))
        }
    }
}

/// A selected node as shown in the closed control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub value: String,
    pub label: String,
}

/// Selected nodes in document order over the full, unfiltered tree.
///
/// Values that match no node contribute nothing. Nodes sharing a selected
/// value each contribute their own label.
pub fn derive_selected(roots: &[TreeNode], selection: &Selection) -> Vec<SelectedItem> {
    let selected = selection.as_set();
    if selected.is_empty() {
        return Vec::new();
    }
    walk(roots)
        .filter(|n| selected.contains(n.value.as_str()))
        .map(|n| SelectedItem {
            value: n.value.clone(),
            label: n.label.clone(),
        })
        .collect()
}

/// Labels of selected nodes in document order.
pub fn derive_labels(roots: &[TreeNode], selection: &Selection) -> Vec<String> {
    derive_selected(roots, selection)
        .into_iter()
        .map(|item| item.label)
        .collect()
}
