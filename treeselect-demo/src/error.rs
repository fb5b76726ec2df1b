use thiserror::Error;
use treeselect::TreeError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
