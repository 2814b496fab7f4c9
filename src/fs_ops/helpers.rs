//! I/O error message helpers.
//!
//! Builds human-friendly messages for `FsError::Io` with platform-aware hints
//! derived from the raw OS error code, falling back to the ErrorKind.

use std::io;
use std::path::Path;

/// Format "<op> '<path>': <error>" plus an actionable hint when one is known.
pub(crate) fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and mode bits");
                }
                libc::ENOENT => msg.push_str("; path not found, verify it exists"),
                libc::EEXIST => msg.push_str("; already exists"),
                libc::ENOTDIR => msg.push_str("; a path component is not a directory"),
                libc::EISDIR => msg.push_str("; is a directory"),
                libc::ENOTEMPTY => msg.push_str("; directory not empty, remove its contents first"),
                libc::ENOSPC => msg.push_str("; insufficient space on device"),
                libc::EROFS => msg.push_str("; read-only filesystem"),
                libc::ELOOP => msg.push_str("; too many levels of symbolic links"),
                libc::ENAMETOOLONG => msg.push_str("; file name or path too long"),
                libc::EMFILE | libc::ENFILE => msg.push_str("; too many open files"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"), // ERROR_ACCESS_DENIED
                2 | 3 => msg.push_str("; path not found, verify it exists"),
                32 => msg.push_str("; sharing violation, file is in use"),
                80 | 183 => msg.push_str("; already exists"),
                112 => msg.push_str("; insufficient disk space"),
                145 => msg.push_str("; directory not empty, remove its contents first"),
                206 => msg.push_str("; file name or path too long"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and mode bits");
            }
            io::ErrorKind::NotFound => msg.push_str("; path not found, verify it exists"),
            io::ErrorKind::AlreadyExists => msg.push_str("; already exists"),
            io::ErrorKind::InvalidData => msg.push_str("; contents are not valid UTF-8"),
            _ => {}
        }
    }

    msg
}
