//! A searchable, hierarchical selection control for terminal interfaces.
//!
//! The crate splits into a pure engine and a widget on top of it:
//!
//! - [`node`]: the option tree ([`TreeNode`]), traversal and loading.
//! - [`search`]: match/visibility rules and the cached [`SearchIndex`].
//! - [`expansion`]: the set of expanded nodes.
//! - [`selection`] and [`summary`]: caller-owned [`Selection`] values, the
//!   operations that change them, and the closed-control summary.
//! - [`widget`]: [`TreeSelect`], which owns overlay, search, expansion and
//!   cursor state, handles input and renders a [`View`].

pub mod config;
pub mod error;
pub mod event;
pub mod expansion;
pub mod input;
pub mod node;
pub mod scroll;
pub mod search;
pub mod selection;
pub mod summary;
pub mod text;
pub mod widget;

pub use config::TreeSelectConfig;
pub use error::TreeError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use expansion::ExpansionState;
pub use node::TreeNode;
pub use search::{MatchMode, NodeFlags, SearchIndex};
pub use selection::{SelectedItem, Selection, SelectionMode};
pub use summary::Summary;
pub use widget::{EventResult, Line, Rect, Response, Role, Span, TreeSelect, View, VisibleRow};
