//! What the control shows while the overlay is closed.

use crate::node::TreeNode;
use crate::selection::{SelectedItem, Selection, derive_selected};

/// Number of chips shown before the overflow indicator.
pub const DEFAULT_MAX_CHIPS: usize = 2;

/// Closed-control summary of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Nothing selected (or nothing selected that exists in the tree).
    Placeholder(String),
    /// The label of the single selected node.
    Single(String),
    /// Removable chips plus the count of selected labels not shown.
    Chips {
        chips: Vec<SelectedItem>,
        overflow: usize,
    },
}

impl Summary {
    /// Derive the summary from the tree and the caller's selection.
    ///
    /// Labels come from [`derive_selected`], so chips follow document order
    /// and the overflow counts derived labels, not raw selected values.
    pub fn derive(
        roots: &[TreeNode],
        selection: &Selection,
        placeholder: &str,
        max_chips: usize,
    ) -> Self {
        let mut items = derive_selected(roots, selection);
        if items.is_empty() {
            return Summary::Placeholder(placeholder.to_string());
        }

        match selection {
            Selection::Single(_) => Summary::Single(items.swap_remove(0).label),
            Selection::Multiple(_) => {
                let overflow = items.len().saturating_sub(max_chips);
                items.truncate(max_chips);
                Summary::Chips {
                    chips: items,
                    overflow,
                }
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Summary::Placeholder(_))
    }

    /// The overflow indicator text, e.g. `+3`.
    pub fn overflow_label(&self) -> Option<String> {
        match self {
            Summary::Chips { overflow, .. } if *overflow > 0 => Some(format!("+{}", overflow)),
            _ => None,
        }
    }
}
