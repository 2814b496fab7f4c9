//! Platform-specific helpers.
//! Hides the Unix/Windows permission differences behind a uniform API so the
//! primitives can stay platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{mkdir_with_mode, open_log_file_secure_append, open_with_mode};

#[cfg(not(unix))]
pub use windows::{mkdir_with_mode, open_log_file_secure_append, open_with_mode};

/// How a file is opened for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Create if missing, truncate if present.
    Truncate,
    /// Append to an existing file; never creates.
    Append,
}
