//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::search::MatchMode;
use crate::selection::SelectionMode;
use crate::summary::DEFAULT_MAX_CHIPS;

/// Options for a [`TreeSelect`](crate::TreeSelect) instance.
///
/// Missing fields take their defaults when deserialized, so a host can
/// keep a partial table in its own settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSelectConfig {
    /// Shown in the closed control when nothing is selected.
    pub placeholder: String,

    /// Selection cardinality. Fixed once the widget is created.
    pub multiple: bool,

    /// Whether the search input is shown and accepts typing.
    pub searchable: bool,

    /// Disables the whole control: it never opens and ignores input.
    pub disabled: bool,

    /// Maximum number of option rows visible at once.
    pub max_height: u16,

    /// How search terms are matched against labels.
    pub match_mode: MatchMode,

    /// Restore manual expansion when the search term is cleared.
    pub restore_expansion: bool,

    /// Chips shown in the closed control before the `+N` indicator.
    pub max_chips: usize,
}

impl Default for TreeSelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".to_string(),
            multiple: false,
            searchable: true,
            disabled: false,
            max_height: 10,
            match_mode: MatchMode::Substring,
            restore_expansion: false,
            max_chips: DEFAULT_MAX_CHIPS,
        }
    }
}

impl TreeSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Allow selecting multiple values.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Cap the option list height (at least one row).
    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = rows.max(1);
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn restore_expansion(mut self, restore: bool) -> Self {
        self.restore_expansion = restore;
        self
    }

    pub fn max_chips(mut self, chips: usize) -> Self {
        self.max_chips = chips;
        self
    }

    pub fn selection_mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}
