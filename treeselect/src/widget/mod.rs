//! The tree select widget.
//!
//! [`TreeSelect`] ties the pieces together: a trigger showing the selection
//! summary, an overlay with a search field, and a scrollable option tree.
//! Hosts feed it [`Event`](crate::Event)s together with their current
//! [`Selection`](crate::Selection), draw the [`View`] it renders, and store
//! whatever selection it reports back.
//!
//! # Example
//!
//! ```
//! use treeselect::{Event, Key, Rect, Selection, TreeNode, TreeSelect, TreeSelectConfig};
//!
//! let data = vec![
//!     TreeNode::new("1", "Frontend", "fe").child(TreeNode::new("1-1", "React", "react")),
//! ];
//! let mut widget = TreeSelect::with_data(TreeSelectConfig::new(), data);
//! let mut value = Selection::Single(None);
//!
//! widget.handle_event(&Event::key(Key::Enter), &value);
//! for c in "react".chars() {
//!     widget.handle_event(&Event::key(Key::Char(c)), &value);
//! }
//! let response = widget.handle_event(&Event::key(Key::Enter), &value);
//! if let Some(next) = response.value {
//!     value = next;
//! }
//!
//! assert_eq!(value, Selection::single("react"));
//! assert!(!widget.is_open());
//! let view = widget.render(Rect::new(0, 0, 30, 8), &value);
//! assert!(view.lines[0].text().starts_with("React"));
//! ```

mod events;
mod hit;
mod render;
mod state;

pub use events::{EventResult, Response};
pub use hit::{HitMap, HitTarget, Rect};
pub use render::{Line, Role, Span, View};
pub use state::{TreeSelect, ValueChangeHandler, VisibleRow};
