//! Typed error definitions for scoped_fs.
//! Every filesystem operation reports one of these; nothing in the crate aborts the process.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fs_ops::helpers::describe_io_error;

/// Result alias used by every filesystem operation.
pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("{0} is not a regular file")]
    NotRegularFile(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Permission denied while trying to {op} '{path}'")]
    PermissionDenied { path: PathBuf, op: &'static str },

    #[error("Path already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("{}", describe_io_error(.op, .path, .source))]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode JSON for '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot determine current working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl FsError {
    /// Classify an io::Error raised while performing `op` on `path`.
    pub fn from_io(op: &'static str, path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: path.to_path_buf(),
                op,
            },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::Io {
                op,
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Returns a `map_err` adapter bound to `op`/`path`.
    pub(crate) fn io_with<'a>(
        op: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(io::Error) -> FsError + 'a {
        move |e| FsError::from_io(op, path, e)
    }

    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FsError::NotFound(_) => 2,
            FsError::NotRegularFile(_) => 10,
            FsError::NotADirectory(_) => 11,
            FsError::PermissionDenied { .. } => 13,
            FsError::AlreadyExists(_) => 17,
            FsError::Io { .. } => 20,
            FsError::Parse { .. } => 30,
            FsError::Encode { .. } => 31,
            FsError::CurrentDir(_) => 40,
        }
    }

    /// Short snake_case label, used as the `kind` field in log events.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FsError::NotFound(_) => "not_found",
            FsError::NotRegularFile(_) => "not_regular_file",
            FsError::NotADirectory(_) => "not_a_directory",
            FsError::PermissionDenied { .. } => "permission_denied",
            FsError::AlreadyExists(_) => "already_exists",
            FsError::Io { .. } => "io",
            FsError::Parse { .. } => "parse",
            FsError::Encode { .. } => "encode",
            FsError::CurrentDir(_) => "current_dir",
        }
    }

    /// True for the missing-path case regardless of which operation hit it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}
