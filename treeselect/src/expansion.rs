//! Expanded-node tracking.

use std::collections::HashSet;

use crate::node::TreeNode;

/// The set of expanded node ids, owned by the widget.
///
/// Manual toggles flip single ids. While a search is active the whole set
/// is replaced by the search's auto-expansion on every term change. When
/// `restore` is enabled, the manual set in effect before the search is
/// kept aside and put back once the term is cleared.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
    /// Manual expansion saved when a search started (restore mode only).
    saved: Option<HashSet<String>>,
    restore: bool,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state that restores manual expansion after a search ends.
    pub fn with_restore(restore: bool) -> Self {
        Self {
            restore,
            ..Default::default()
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Flip membership of `id`. Returns the new expanded state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Returns true if the id was not already expanded.
    pub fn expand(&mut self, id: &str) -> bool {
        self.expanded.insert(id.to_string())
    }

    /// Returns true if the id was expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    /// Expand every node that has children.
    pub fn expand_all(&mut self, roots: &[TreeNode]) {
        self.expanded.extend(
            crate::node::walk(roots)
                .filter(|n| n.has_children())
                .map(|n| n.id.clone()),
        );
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Replace the set with the expansion computed for a non-empty term.
    pub fn apply_search(&mut self, auto_expanded: &HashSet<String>) {
        if self.restore && self.saved.is_none() {
            self.saved = Some(self.expanded.clone());
        }
        self.expanded = auto_expanded.clone();
    }

    /// Called when the term becomes empty.
    ///
    /// Without restore mode the search's expansion is left in place.
    pub fn end_search(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.expanded = saved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = ExpansionState::new();
        assert!(state.toggle("1"));
        assert!(state.is_expanded("1"));
        assert!(!state.toggle("1"));
        assert!(!state.is_expanded("1"));
    }

    #[test]
    fn search_replaces_instead_of_merging() {
        let mut state = ExpansionState::new();
        state.expand("manual");
        state.apply_search(&set(&["1"]));
        assert!(!state.is_expanded("manual"));
        assert!(state.is_expanded("1"));

        state.end_search();
        assert!(state.is_expanded("1"));
        assert!(!state.is_expanded("manual"));
    }

    #[test]
    fn restore_mode_brings_back_manual_expansion() {
        let mut state = ExpansionState::with_restore(true);
        state.expand("manual");
        state.apply_search(&set(&["1"]));
        state.apply_search(&set(&["2"]));
        assert_eq!(state.len(), 1);
        assert!(state.is_expanded("2"));

        state.end_search();
        assert!(state.is_expanded("manual"));
        assert!(!state.is_expanded("2"));
    }
}
