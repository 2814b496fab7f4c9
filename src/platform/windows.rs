//! Windows implementations of platform helpers.
//!
//! Windows lacks POSIX mode semantics; modes are accepted and ignored.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use super::OpenMode;

/// Open `path` for writing; `_mode` has no Windows equivalent.
pub fn open_with_mode(path: &Path, open_mode: OpenMode, _mode: u32) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    match open_mode {
        OpenMode::Truncate => opts.create(true).truncate(true),
        OpenMode::Append => opts.append(true),
    };
    opts.open(path)
}

/// Create a single directory level.
pub fn mkdir_with_mode(path: &Path, _mode: u32) -> io::Result<()> {
    fs::create_dir(path)
}

/// Open log file for appending (no ACL changes).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}
