//! Tree select widget state.

use crate::config::TreeSelectConfig;
use crate::expansion::ExpansionState;
use crate::input::SearchInput;
use crate::node::{self, TreeNode};
use crate::scroll::Viewport;
use crate::search::SearchIndex;
use crate::selection::{self, Selection, SelectionMode};
use crate::summary::Summary;

use super::hit::HitMap;

/// Callback receiving every new selection value.
pub type ValueChangeHandler = Box<dyn FnMut(&Selection)>;

/// A visible node in the flattened option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub label: String,
    pub value: String,
    /// Depth in tree (0 = root).
    pub depth: u16,
    pub has_children: bool,
    pub is_expanded: bool,
    /// Direct match of an active search term.
    pub is_match: bool,
    pub disabled: bool,
}

/// A searchable, hierarchical selection control.
///
/// The selection itself belongs to the caller: every method that can change
/// it takes the caller's current [`Selection`] and reports the new value
/// through the value-change callback (and its return value) instead of
/// storing it. The widget owns everything else: the overlay open flag, the
/// search field, the expanded nodes, the cursor and the scroll position.
///
/// # Example
///
/// ```
/// use treeselect::{Selection, TreeNode, TreeSelect, TreeSelectConfig};
///
/// let data = vec![
///     TreeNode::new("1", "Frontend", "fe").child(TreeNode::new("1-1", "React", "react")),
/// ];
/// let mut widget = TreeSelect::with_data(TreeSelectConfig::new().multiple(), data);
///
/// let mut value = Selection::Multiple(vec![]);
/// if let Some(next) = widget.select_value("react", &value) {
///     value = next;
/// }
/// assert_eq!(value, Selection::multiple(["react"]));
/// ```
pub struct TreeSelect {
    pub(super) config: TreeSelectConfig,
    pub(super) roots: Vec<TreeNode>,
    pub(super) open: bool,
    pub(super) search: SearchInput,
    pub(super) index: SearchIndex,
    pub(super) expansion: ExpansionState,
    /// Flattened visible rows (rebuilt on search and expand/collapse).
    pub(super) rows: Vec<VisibleRow>,
    /// Cursor (index into rows).
    pub(super) cursor: Option<usize>,
    pub(super) viewport: Viewport,
    pub(super) hits: HitMap,
    on_value_change: Option<ValueChangeHandler>,
}

impl TreeSelect {
    pub fn new(config: TreeSelectConfig) -> Self {
        let viewport = Viewport::new(usize::from(config.max_height));
        let expansion = ExpansionState::with_restore(config.restore_expansion);
        let index = SearchIndex::build(&[], "", config.match_mode);
        Self {
            config,
            roots: Vec::new(),
            open: false,
            search: SearchInput::new(),
            index,
            expansion,
            rows: Vec::new(),
            cursor: None,
            viewport,
            hits: HitMap::new(),
            on_value_change: None,
        }
    }

    pub fn with_data(config: TreeSelectConfig, roots: Vec<TreeNode>) -> Self {
        let mut widget = Self::new(config);
        widget.set_data(roots);
        widget
    }

    /// Register the callback fired on every selection change.
    pub fn on_value_change(mut self, handler: impl FnMut(&Selection) + 'static) -> Self {
        self.on_value_change = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &TreeSelectConfig {
        &self.config
    }

    pub fn mode(&self) -> SelectionMode {
        self.config.selection_mode()
    }

    /// Enable or disable the whole control. Disabling closes the overlay.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    pub fn data(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Replace the tree. The search term is kept and re-applied.
    pub fn set_data(&mut self, roots: Vec<TreeNode>) {
        self.roots = roots;
        self.index = SearchIndex::build(&self.roots, self.search.text(), self.config.match_mode);
        if self.index.is_active() {
            self.expansion.apply_search(self.index.auto_expanded());
        }
        self.rebuild_rows();
    }

    // -------------------------------------------------------------------------
    // Overlay
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the overlay. Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        if self.open || self.config.disabled {
            return false;
        }
        self.open = true;
        log::debug!("tree select opened");
        true
    }

    /// Close the overlay. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        log::debug!("tree select closed");
        true
    }

    /// Returns true if the state changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if open { self.open() } else { self.close() }
    }

    /// Open with the cursor on the first selected row, if any is visible.
    pub(super) fn open_at_selection(&mut self, current: &Selection) -> bool {
        if !self.open() {
            return false;
        }
        let selected = current.as_set();
        let first = self
            .rows
            .iter()
            .position(|r| selected.contains(r.value.as_str()));
        self.cursor = first.or(if self.rows.is_empty() { None } else { Some(0) });
        self.scroll_to_cursor();
        true
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        self.search.text()
    }

    pub fn search_input(&self) -> &SearchInput {
        &self.search
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    /// Set the search term. Ignored when the control is not searchable.
    /// Returns true if the term changed.
    pub fn set_search(&mut self, term: &str) -> bool {
        if !self.config.searchable || self.search.text() == term {
            return false;
        }
        self.search.set(term);
        self.search_changed();
        true
    }

    /// Recompute the index after the term changed.
    pub(super) fn search_changed(&mut self) {
        let was_active = self.index.is_active();
        self.index = SearchIndex::build(&self.roots, self.search.text(), self.config.match_mode);
        if self.index.is_active() {
            self.expansion.apply_search(self.index.auto_expanded());
        } else if was_active {
            self.expansion.end_search();
        }
        self.rebuild_rows();

        // Land on the first direct match, otherwise the top.
        self.cursor = self
            .rows
            .iter()
            .position(|r| r.is_match)
            .or(if self.rows.is_empty() { None } else { Some(0) });
        self.scroll_to_cursor();
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Flip a node between expanded and collapsed.
    ///
    /// Only nodes with children can be toggled; returns false otherwise.
    pub fn toggle_expand(&mut self, id: &str) -> bool {
        if !self.expandable(id) {
            return false;
        }
        self.expansion.toggle(id);
        self.rebuild_rows_keep_cursor();
        true
    }

    pub fn expand(&mut self, id: &str) -> bool {
        if !self.expandable(id) || !self.expansion.expand(id) {
            return false;
        }
        self.rebuild_rows_keep_cursor();
        true
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        if !self.expansion.collapse(id) {
            return false;
        }
        self.rebuild_rows_keep_cursor();
        true
    }

    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.roots);
        self.rebuild_rows_keep_cursor();
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
        self.rebuild_rows_keep_cursor();
    }

    fn expandable(&self, id: &str) -> bool {
        node::find_by_id(&self.roots, id).is_some_and(TreeNode::has_children)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// The rows currently shown in the option list, in document order.
    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    pub(super) fn rebuild_rows(&mut self) {
        self.rows.clear();
        collect_rows(&self.roots, &self.index, &self.expansion, 0, &mut self.rows);

        if let Some(cursor) = self.cursor
            && cursor >= self.rows.len()
        {
            self.cursor = self.rows.len().checked_sub(1);
        }
        self.viewport.clamp(self.rows.len());
    }

    fn rebuild_rows_keep_cursor(&mut self) {
        let cursor_id = self.cursor_row().map(|r| r.id.clone());
        self.rebuild_rows();
        if let Some(id) = cursor_id
            && let Some(i) = self.rows.iter().position(|r| r.id == id)
        {
            self.cursor = Some(i);
        }
        self.scroll_to_cursor();
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_row(&self) -> Option<&VisibleRow> {
        self.cursor.and_then(|i| self.rows.get(i))
    }

    /// Set the cursor, clamped to the rows. Returns the new position.
    pub fn set_cursor(&mut self, index: usize) -> Option<usize> {
        if self.rows.is_empty() {
            self.cursor = None;
        } else {
            self.cursor = Some(index.min(self.rows.len() - 1));
        }
        self.scroll_to_cursor();
        self.cursor
    }

    pub(super) fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = None;
            return;
        }
        let next = match self.cursor {
            Some(c) => c.saturating_add_signed(delta),
            None if delta < 0 => self.rows.len() - 1,
            None => 0,
        };
        self.set_cursor(next);
    }

    pub(super) fn cursor_to_parent(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let Some(depth) = self.rows.get(cursor).map(|r| r.depth) else {
            return false;
        };
        if depth == 0 {
            return false;
        }
        if let Some(parent) = (0..cursor).rev().find(|&i| self.rows[i].depth == depth - 1) {
            self.set_cursor(parent);
            return true;
        }
        false
    }

    pub(super) fn cursor_to_first_child(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        match (self.rows.get(cursor), self.rows.get(cursor + 1)) {
            (Some(current), Some(next)) if current.is_expanded && next.depth > current.depth => {
                self.set_cursor(cursor + 1);
                true
            }
            _ => false,
        }
    }

    pub(super) fn scroll_to_cursor(&mut self) {
        if let Some(cursor) = self.cursor {
            self.viewport.ensure_visible(cursor, self.rows.len());
        } else {
            self.viewport.clamp(self.rows.len());
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select the first node (in document order) carrying `value`.
    ///
    /// Returns the new selection, or `None` when nothing changed (disabled
    /// node or control, unknown value).
    pub fn select_value(&mut self, value: &str, current: &Selection) -> Option<Selection> {
        let node = node::find_by_value(&self.roots, value)?.clone();
        self.select_node(&node, current)
    }

    /// Select the node behind a visible row.
    pub fn select_row(&mut self, index: usize, current: &Selection) -> Option<Selection> {
        let id = self.rows.get(index)?.id.clone();
        let node = node::find_by_id(&self.roots, &id)?.clone();
        self.select_node(&node, current)
    }

    fn select_node(&mut self, node: &TreeNode, current: &Selection) -> Option<Selection> {
        if self.config.disabled {
            return None;
        }
        let current = current.clone().into_mode(self.mode());
        let next = selection::select(&current, node)?;
        self.emit(&next);
        if self.mode() == SelectionMode::Single {
            self.close();
        }
        Some(next)
    }

    /// Empty the selection. The overlay stays as it is.
    pub fn clear(&mut self, current: &Selection) -> Option<Selection> {
        if self.config.disabled {
            return None;
        }
        let current = current.clone().into_mode(self.mode());
        let next = selection::clear(&current)?;
        self.emit(&next);
        Some(next)
    }

    /// Remove one value (multiple mode only).
    pub fn remove_item(&mut self, value: &str, current: &Selection) -> Option<Selection> {
        if self.config.disabled || self.mode() != SelectionMode::Multiple {
            return None;
        }
        let current = current.clone().into_mode(SelectionMode::Multiple);
        let next = selection::remove_item(&current, value)?;
        self.emit(&next);
        Some(next)
    }

    fn emit(&mut self, next: &Selection) {
        log::debug!("selection changed: {:?}", next);
        if let Some(handler) = self.on_value_change.as_mut() {
            handler(next);
        }
    }

    /// Labels of the selected nodes in document order.
    pub fn selected_labels(&self, current: &Selection) -> Vec<String> {
        selection::derive_labels(&self.roots, current)
    }

    /// What the closed control shows for `current`.
    pub fn summary(&self, current: &Selection) -> Summary {
        let current = current.clone().into_mode(self.mode());
        Summary::derive(
            &self.roots,
            &current,
            &self.config.placeholder,
            self.config.max_chips,
        )
    }
}

impl std::fmt::Debug for TreeSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSelect")
            .field("config", &self.config)
            .field("roots", &self.roots.len())
            .field("open", &self.open)
            .field("search", &self.search.text())
            .field("expanded", &self.expansion.len())
            .field("rows", &self.rows.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Recursively collect visible rows. Hidden nodes prune their subtree.
fn collect_rows(
    nodes: &[TreeNode],
    index: &SearchIndex,
    expansion: &ExpansionState,
    depth: u16,
    out: &mut Vec<VisibleRow>,
) {
    for node in nodes {
        let flags = index.flags(&node.id);
        if !flags.visible {
            continue;
        }
        let has_children = node.has_children();
        let is_expanded = has_children && expansion.is_expanded(&node.id);

        out.push(VisibleRow {
            id: node.id.clone(),
            label: node.label.clone(),
            value: node.value.clone(),
            depth,
            has_children,
            is_expanded,
            is_match: index.is_active() && flags.is_match,
            disabled: node.disabled,
        });

        if is_expanded {
            collect_rows(&node.children, index, expansion, depth + 1, out);
        }
    }
}
