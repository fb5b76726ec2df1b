//! Error types for loading and validating option trees.

use thiserror::Error;

/// Errors that can occur when loading or validating a tree.
///
/// Widget operations never fail; these only surface from the explicit
/// loading and validation helpers in [`crate::node`].
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two nodes share the same id.
    #[error("duplicate node id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A node has an empty id.
    #[error("node '{label}' has an empty id")]
    EmptyId {
        /// Label of the offending node.
        label: String,
    },

    /// The tree could not be parsed.
    #[error("failed to parse tree: {0}")]
    Parse(#[from] serde_json::Error),

    /// The tree file could not be read.
    #[error("failed to read tree: {0}")]
    Io(#[from] std::io::Error),
}
