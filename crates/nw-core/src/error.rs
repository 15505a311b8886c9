use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by [`Suggester`](crate::Suggester).
///
/// A key missing from a record file, a missing n-gram shard, and reaching
/// the end of a file are not errors; they contribute no candidates.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("candidate count must be at least 1, got {0}")]
    InvalidCandidateLen(usize),

    #[error("read buffer size must be at least 1 byte")]
    InvalidBufSize,

    #[error("data directory {} is not accessible: {source}", .path.display())]
    DataDirMissing { path: PathBuf, source: io::Error },

    #[error("data path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot open {}: {source}", .path.display())]
    OpenUnigram { path: PathBuf, source: io::Error },

    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl SuggestError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        SuggestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for errors raised while constructing an engine.
    pub fn is_config(&self) -> bool {
        !matches!(self, SuggestError::Io { .. })
    }
}
