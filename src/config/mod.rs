//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, WriteOptions};
pub use xml::{load_config_from_env, load_config_from_xml_path};

/// Mode applied to files created by write/update/copy when none is given.
pub const DEFAULT_FILE_MODE: u32 = 0o644;
/// Mode applied to directories created by create_dir when none is given.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Env var naming an explicit XML config file.
pub const CONFIG_ENV: &str = "SCOPED_FS_CONFIG";
/// Env var overriding the configured root directory.
pub const ROOT_ENV: &str = "SCOPED_FS_ROOT";
