use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, BlockError>;

/// Failures that cross the library boundary.
///
/// A missing marker or an empty block is not an error: those come back as
/// `Ok(None)`. Numeric tokens that fail to parse only end a block.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing extraction plan {}: {source}", path.display())]
    Plan {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("building record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl BlockError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BlockError::Io {
            path: path.into(),
            source,
        }
    }
}
