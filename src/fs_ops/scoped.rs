//! Scoped directory handle.
//!
//! A `ScopedDir` is bound to one root for its whole lifetime; every operation
//! resolves its path arguments against that root and then runs the primitive
//! I/O. Handles opened by an operation are dropped before it returns, on the
//! error paths too.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::io_copy::pump;
use super::list::{self, ContentItem};
use super::primitives::{LocalPrimitives, Primitives, Stat};
use super::resolve::PathResolver;
use crate::config::{Config, WriteOptions, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::errors::{FsError, Result};
use crate::platform::OpenMode;

/// Root-bound filesystem handle.
#[derive(Debug, Clone)]
pub struct ScopedDir<P: Primitives = LocalPrimitives> {
    resolver: PathResolver,
    prims: P,
    file_mode: u32,
    dir_mode: u32,
}

impl ScopedDir<LocalPrimitives> {
    /// Bind to `root` without checking that it exists. A relative root is
    /// made absolute against the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_primitives(root, LocalPrimitives)
    }

    /// Bind to `root`, which must be an existing directory. The stored root is
    /// canonical (symlinks resolved, no UNC prefix on Windows).
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical =
            dunce::canonicalize(root).map_err(FsError::io_with("open root", root))?;
        let stat = LocalPrimitives
            .stat(&canonical)
            .map_err(FsError::io_with("open root", &canonical))?;
        if !stat.is_dir() {
            return Err(FsError::NotADirectory(canonical));
        }
        Self::new(canonical)
    }

    /// Bind to the process working directory as it is right now.
    pub fn current() -> Result<Self> {
        Ok(Self::from_resolver(
            PathResolver::from_current_dir()?,
            LocalPrimitives,
        ))
    }

    /// Build a handle from config: its root (or the working directory) and default modes.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let dir = match &cfg.root {
            Some(root) => Self::new(root.clone())?,
            None => Self::current()?,
        };
        Ok(dir.with_modes(cfg.file_mode, cfg.dir_mode))
    }
}

impl<P: Primitives> ScopedDir<P> {
    /// Bind to `root` using a custom primitive backend.
    pub fn with_primitives(root: impl Into<PathBuf>, prims: P) -> Result<Self> {
        Ok(Self::from_resolver(PathResolver::new(root)?, prims))
    }

    fn from_resolver(resolver: PathResolver, prims: P) -> Self {
        Self {
            resolver,
            prims,
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }

    /// Replace the default modes used when a call passes no permission.
    pub fn with_modes(mut self, file_mode: u32, dir_mode: u32) -> Self {
        self.file_mode = file_mode;
        self.dir_mode = dir_mode;
        self
    }

    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    pub fn primitives(&self) -> &P {
        &self.prims
    }

    /// Absolute path that an operation on `path` would touch.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.resolver.resolve(path)
    }

    /// Copy the regular file `src` to `dest` (created or truncated).
    /// Returns the number of bytes copied.
    pub fn copy(&self, src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
        let src = self.resolve(src);
        let dest = self.resolve(dest);

        let stat = self.prims.stat(&src).map_err(FsError::io_with("stat", &src))?;
        if !stat.is_file() {
            return Err(FsError::NotRegularFile(src));
        }
        if self.same_file(&src, &stat, &dest) {
            return Err(FsError::Io {
                op: "copy",
                path: dest,
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            });
        }

        let mut reader = self.prims.open(&src).map_err(FsError::io_with("open", &src))?;
        let mut writer = self
            .prims
            .create(&dest, OpenMode::Truncate, self.file_mode)
            .map_err(FsError::io_with("create", &dest))?;
        let bytes = pump(&mut *reader, &mut *writer).map_err(FsError::io_with("copy into", &dest))?;

        info!(src = %src.display(), dest = %dest.display(), bytes, "Copied file");
        Ok(bytes)
    }

    /// Create one directory level. Fails with `AlreadyExists` when something is
    /// already at `path`, and `NotFound` when the parent is missing.
    pub fn create_dir(&self, path: impl AsRef<Path>, opts: WriteOptions) -> Result<()> {
        let path = self.resolve(path);
        let mode = opts.permission.unwrap_or(self.dir_mode);
        self.prims
            .mkdir(&path, mode)
            .map_err(FsError::io_with("create directory", &path))?;
        info!(path = %path.display(), mode = %format!("{mode:o}"), "Created directory");
        Ok(())
    }

    /// Remove a file or an empty directory.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(path);
        self.prims
            .remove(&path)
            .map_err(FsError::io_with("remove", &path))?;
        info!(path = %path.display(), "Deleted");
        Ok(())
    }

    /// Extension without the dot; empty when there is none.
    pub fn get_extension(&self, path: impl AsRef<Path>) -> String {
        extension_of(path.as_ref())
    }

    /// Size in bytes of whatever is at `path`.
    pub fn get_size(&self, path: impl AsRef<Path>) -> Result<u64> {
        Ok(self.stat(path)?.len)
    }

    /// True when `path` can be stat'ed. Any stat failure reads as `false`, not
    /// only NotFound: a permission error or a non-directory path component
    /// does too. Use [`ScopedDir::stat`] for the reason.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = self.resolve(path);
        match self.prims.stat(&path) {
            Ok(_) => true,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!(path = %path.display(), error = %e, "exists: stat failed");
                }
                false
            }
        }
    }

    /// Stat `path` (symlinks followed), reporting why it failed.
    pub fn stat(&self, path: impl AsRef<Path>) -> Result<Stat> {
        let path = self.resolve(path);
        self.prims.stat(&path).map_err(FsError::io_with("stat", &path))
    }

    /// List the entries of `target` (default: the root). See [`list::list_contents`].
    pub fn list_contents(&self, target: Option<&Path>, recursive: bool) -> Result<Vec<ContentItem>> {
        list::list_contents(&self.prims, &self.resolver, target, recursive)
    }

    /// Read a whole file as UTF-8 text.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = self.resolve(path);
        let mut reader = self.prims.open(&path).map_err(FsError::io_with("open", &path))?;
        let mut out = String::new();
        reader
            .read_to_string(&mut out)
            .map_err(FsError::io_with("read", &path))?;
        debug!(path = %path.display(), bytes = out.len(), "Read file");
        Ok(out)
    }

    /// Read a whole file as raw bytes.
    pub fn read_bytes(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = self.resolve(path);
        let mut reader = self.prims.open(&path).map_err(FsError::io_with("open", &path))?;
        let mut out = Vec::new();
        reader
            .read_to_end(&mut out)
            .map_err(FsError::io_with("read", &path))?;
        debug!(path = %path.display(), bytes = out.len(), "Read file");
        Ok(out)
    }

    /// Append `text` to an existing file. A missing file is `NotFound`.
    pub fn update(&self, path: impl AsRef<Path>, text: &str) -> Result<()> {
        let path = self.resolve(path);
        self.put(&path, text.as_bytes(), OpenMode::Append, self.file_mode)?;
        info!(path = %path.display(), bytes = text.len(), "Appended to file");
        Ok(())
    }

    /// Create or overwrite `path` with `text`.
    pub fn write(&self, path: impl AsRef<Path>, text: &str, opts: WriteOptions) -> Result<()> {
        self.write_bytes(path, text.as_bytes(), opts)
    }

    /// Create or overwrite `path` with raw bytes.
    pub fn write_bytes(&self, path: impl AsRef<Path>, bytes: &[u8], opts: WriteOptions) -> Result<()> {
        let path = self.resolve(path);
        let mode = opts.permission.unwrap_or(self.file_mode);
        self.put(&path, bytes, OpenMode::Truncate, mode)?;
        info!(path = %path.display(), bytes = bytes.len(), "Wrote file");
        Ok(())
    }

    // True when `dest` exists and is the file at `src`, however it is spelled
    // (`..`, symlink, hard link). Checked before `dest` is truncated.
    fn same_file(&self, src: &Path, src_stat: &Stat, dest: &Path) -> bool {
        if src == dest {
            return true;
        }
        let Ok(dest_stat) = self.prims.stat(dest) else {
            return false;
        };
        if let (Some(a), Some(b)) = (src_stat.file_id, dest_stat.file_id) {
            return a == b;
        }
        match (self.prims.canonicalize(src), self.prims.canonicalize(dest)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn put(&self, path: &Path, bytes: &[u8], open_mode: OpenMode, mode: u32) -> Result<()> {
        let mut writer = self
            .prims
            .create(path, open_mode, mode)
            .map_err(FsError::io_with("open for writing", path))?;
        writer
            .write_all(bytes)
            .and_then(|_| writer.flush())
            .map_err(FsError::io_with("write", path))
    }
}

/// Extension of `path` without the leading dot; empty when there is none.
/// Dotfiles such as `.bashrc` have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}
