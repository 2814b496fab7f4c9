//! Unix implementations of platform helpers.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

use super::OpenMode;

/// Open `path` for writing. `mode` only applies when the file is created
/// (and is still subject to the process umask).
pub fn open_with_mode(path: &Path, open_mode: OpenMode, mode: u32) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).mode(mode);
    match open_mode {
        OpenMode::Truncate => opts.create(true).truncate(true),
        OpenMode::Append => opts.append(true),
    };
    opts.open(path)
}

/// Create a single directory level with the given mode (umask applies).
pub fn mkdir_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    DirBuilder::new().recursive(false).mode(mode).create(path)
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, its permissions are left untouched.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}
