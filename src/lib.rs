//! Core library for `scoped_fs`.
//!
//! A small filesystem convenience layer: every operation takes a path that is
//! resolved against a root directory (explicit, or the working directory),
//! then runs plain blocking I/O. The interesting parts are path resolution
//! (`fs_ops::resolve`) and content listing (`fs_ops::list`); copy/read/write are
//! thin wrappers over the primitive capability set in `fs_ops::primitives`.
//!
//! ```no_run
//! use scoped_fs::{ScopedDir, WriteOptions};
//!
//! # fn main() -> scoped_fs::Result<()> {
//! let dir = ScopedDir::open("/srv/app")?;
//! dir.write("files/hello.txt", "Hello, read!\n", WriteOptions::default())?;
//! for item in dir.list_contents(None, true)? {
//!     println!("{} {}", item.kind, item.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod platform;

pub use config::{
    default_config_path, default_log_path, load_config_from_env, load_config_from_xml_path,
    path_has_symlink_ancestor, Config, LogLevel, WriteOptions, DEFAULT_DIR_MODE,
    DEFAULT_FILE_MODE,
};
pub use errors::{FsError, Result};
pub use fs_ops::{
    ContentItem, EntryKind, ItemType, LocalPrimitives, PathResolver, Primitives, ScopedDir, Stat,
};
pub use logging::init_tracing;
pub use platform::OpenMode;

/// Convenience re-exports for embedding applications.
pub mod prelude {
    pub use crate::config::{Config, LogLevel, WriteOptions};
    pub use crate::errors::{FsError as Error, Result as FsResult};
    pub use crate::fs_ops::cwd;
    pub use crate::fs_ops::{ContentItem, ItemType, PathResolver, ScopedDir};
    pub use crate::logging::init_tracing;
}
