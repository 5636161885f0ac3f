//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::stats::Counters;

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TreeError {
    /// A directory could not be listed (missing, unreadable, not a directory).
    #[error("cannot access '{}': {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The max-items guard fired. Carries the counters reached so far.
    #[error(
        "maximum number of processable items reached: {} items exceed the limit of {max_items}",
        counters.total()
    )]
    LimitExceeded { counters: Counters, max_items: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::FilesystemAccess {
            path: path.into(),
            source,
        }
    }
}
