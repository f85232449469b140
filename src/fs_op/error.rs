use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by filesystem operation helpers and [`PathEntry`].
///
/// The taxonomy is intentionally shallow: one variant per condition callers
/// actually branch on. Underlying `io::Error` values are kept as sources on
/// the `Write`/`Read` variants.
///
/// [`PathEntry`]: crate::fs_op::entry::PathEntry
#[derive(Debug, Error)]
pub enum PathOpError {
    /// The target path is already occupied, or occupied by an incompatible
    /// type (e.g. a file where a directory was requested).
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A read or stream target does not exist.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// A directory listing was attempted on a non-directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// I/O failure while writing, creating, deleting or renaming.
    #[error("cannot write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while reading or enumerating a directory.
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PathOpError {
    /// Wrap an I/O error from a write-side operation on `path`.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        PathOpError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O error from a read-side operation on `path`.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        PathOpError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
