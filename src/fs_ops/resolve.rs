//! Path resolution against a root directory.
//!
//! Rules, applied in order:
//! 1. An absolute input is returned unchanged.
//! 2. A relative input is rooted (treated as if it began with a separator).
//! 3. If the rooted input already has the root as a component-wise prefix it is
//!    returned as-is, so a path that already spells out the root is not rooted twice.
//! 4. Otherwise the result is `root.join(input)` with `.` components dropped.
//!
//! Explicit and implicit (working-directory) roots follow the same rules.
//! Resolution never touches the filesystem and never fails.

use std::env;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};
use tracing::trace;

use crate::errors::{FsError, Result};

/// Maps caller-supplied paths onto a fixed absolute root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Bind to `root`. A relative root is made absolute against the working
    /// directory; existence is not checked here.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            current_dir()?.join(root)
        };
        Ok(Self {
            root: strip_cur_dir(&root),
        })
    }

    /// Root taken from the process working directory, read now.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self {
            root: current_dir()?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `input` to an absolute path under the root (see module docs).
    pub fn resolve(&self, input: impl AsRef<Path>) -> PathBuf {
        let input = input.as_ref();

        if input.has_root() || input.is_absolute() {
            return input.to_path_buf();
        }

        let rooted = Path::new(MAIN_SEPARATOR_STR).join(input);
        if rooted.starts_with(&self.root) {
            trace!(input = %input.display(), "Input already carries the root");
            return strip_cur_dir(&rooted);
        }

        let mut out = self.root.clone();
        for c in input.components() {
            if !matches!(c, Component::CurDir) {
                out.push(c.as_os_str());
            }
        }
        out
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(FsError::CurrentDir)
}

// Drop `.` components; `..` is kept as-is since collapsing it lexically is wrong across symlinks.
fn strip_cur_dir(p: &Path) -> PathBuf {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn r(root: &str) -> PathResolver {
        PathResolver::new(root).unwrap()
    }

    #[test]
    fn relative_is_joined_to_root() {
        let res = r("/srv/app");
        assert_eq!(res.resolve("files/hello.txt"), PathBuf::from("/srv/app/files/hello.txt"));
        assert_eq!(res.resolve("./files/./a"), PathBuf::from("/srv/app/files/a"));
    }

    #[test]
    fn absolute_passes_through() {
        let res = r("/srv/app");
        assert_eq!(res.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
        let once = res.resolve("data/x.json");
        assert_eq!(res.resolve(&once), once);
    }

    #[test]
    fn empty_and_dot_resolve_to_root() {
        let res = r("/srv/app");
        assert_eq!(res.resolve(""), PathBuf::from("/srv/app"));
        assert_eq!(res.resolve("."), PathBuf::from("/srv/app"));
    }

    #[test]
    fn relative_spelling_out_root_is_not_doubled() {
        let res = r("/home/u/proj");
        assert_eq!(res.resolve("home/u/proj/x"), PathBuf::from("/home/u/proj/x"));
    }

    #[test]
    fn root_substring_elsewhere_is_not_a_match() {
        let res = r("/data");
        assert_eq!(res.resolve("srv/data/x"), PathBuf::from("/data/srv/data/x"));
        // "/database" shares a string prefix with "/data" but not a component prefix.
        assert_eq!(res.resolve("database/x"), PathBuf::from("/data/database/x"));
    }

    #[test]
    fn parent_components_are_kept() {
        let res = r("/srv/app");
        assert_eq!(res.resolve("../other"), PathBuf::from("/srv/app/../other"));
    }

    #[test]
    fn relative_root_is_absolutized() {
        let res = r("some/dir");
        assert!(res.root().is_absolute());
        assert!(res.root().ends_with("some/dir"));
    }
}
