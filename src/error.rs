//! Error types for the snapshot store.
//!
//! The digest engine cannot fail; every error here comes from the file system
//! boundary.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VersioningError {
    /// Classifies an I/O failure on `path` into the matching error kind.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => VersioningError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => VersioningError::PermissionDenied(path.to_path_buf()),
            _ => VersioningError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, VersioningError>;
