//! Primitive I/O capability set consumed by the scoped handle.
//!
//! Everything above this trait works on resolved absolute paths and never
//! touches `std::fs` directly, so a handle can be backed by something other
//! than the local disk (tests use a fake to inject stat failures).

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::platform::{self, OpenMode};

/// Coarse classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices.
    Other,
}

/// Result of a (symlink-following) stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub kind: EntryKind,
    pub len: u64,
    /// `(device, inode)` on Unix; `None` where the platform has no cheap equivalent.
    pub file_id: Option<(u64, u64)>,
}

impl Stat {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

impl From<&fs::Metadata> for Stat {
    fn from(meta: &fs::Metadata) -> Self {
        let ft = meta.file_type();
        let kind = if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };
        Stat {
            kind,
            len: meta.len(),
            file_id: file_id(meta),
        }
    }
}

#[cfg(unix)]
fn file_id(meta: &fs::Metadata) -> Option<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;
    Some((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn file_id(_meta: &fs::Metadata) -> Option<(u64, u64)> {
    None
}

/// The primitive operations: open, create, stat, remove, mkdir, walk, glob.
///
/// Readers and writers are returned boxed; dropping them closes the handle.
pub trait Primitives {
    /// Open an existing file for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Open a file for writing. `Truncate` creates it with `mode` when missing;
    /// `Append` requires the file to exist.
    fn create(&self, path: &Path, open_mode: OpenMode, mode: u32) -> io::Result<Box<dyn Write>>;

    /// Stat `path`, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<Stat>;

    /// Absolute path with symlinks and `..` resolved; the target must exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Remove a file, or a directory when it is empty.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Create exactly one directory level.
    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Depth-first pre-order listing of every descendant of `dir` (not `dir`
    /// itself), siblings in file-name order.
    fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Expansion of `dir/*`: direct children in file-name order, dotfiles included.
    fn glob(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// `Primitives` over the local filesystem (std::fs + walkdir).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPrimitives;

const BUF_SIZE: usize = 64 * 1024;

impl LocalPrimitives {
    fn collect(walker: WalkDir, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        for entry in walker.sort_by_file_name() {
            match entry {
                Ok(e) => out.push(e.into_path()),
                // Failing to read the target itself is fatal to the listing.
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry during walk");
                }
            }
        }
        Ok(out)
    }
}

impl Primitives for LocalPrimitives {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        let f = File::open(path)?;
        Ok(Box::new(BufReader::with_capacity(BUF_SIZE, f)))
    }

    fn create(&self, path: &Path, open_mode: OpenMode, mode: u32) -> io::Result<Box<dyn Write>> {
        let f = platform::open_with_mode(path, open_mode, mode)?;
        Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f)))
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        fs::metadata(path).map(|m| Stat::from(&m))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        dunce::canonicalize(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        // Do not follow a symlink: removing a link removes the link.
        let meta = fs::symlink_metadata(path)?;
        if meta.file_type().is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()> {
        platform::mkdir_with_mode(path, mode)
    }

    fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::collect(WalkDir::new(dir).min_depth(1), dir)
    }

    fn glob(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Self::collect(WalkDir::new(dir).min_depth(1).max_depth(1), dir)
    }
}
