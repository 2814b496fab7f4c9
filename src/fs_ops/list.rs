//! Directory content listing.
//!
//! Shallow mode expands `target/*`; recursive mode walks the whole subtree
//! depth-first. Each hit is classified by a stat: entries whose stat fails
//! (deleted mid-listing, dangling symlink) are dropped, never represented as
//! empty placeholders. Only a failure to enumerate the target itself is an error.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::primitives::Primitives;
use super::resolve::PathResolver;
use crate::errors::{FsError, Result};

/// File/directory classification of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemType {
    File,
    Directory,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemType::File => "File",
            ItemType::Directory => "Directory",
        })
    }
}

/// One listed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// Base file name, lossily decoded: a name that is not valid UTF-8 gets
    /// U+FFFD replacements here, while `path` keeps the raw bytes.
    pub name: String,
    /// Fully resolved path
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: ItemType,
}

impl ContentItem {
    pub fn is_dir(&self) -> bool {
        self.kind == ItemType::Directory
    }
}

/// List `target` (default: the root) through `prims`, resolving every path with `resolver`.
pub fn list_contents<P: Primitives + ?Sized>(
    prims: &P,
    resolver: &PathResolver,
    target: Option<&Path>,
    recursive: bool,
) -> Result<Vec<ContentItem>> {
    let dir = match target {
        Some(t) => resolver.resolve(t),
        None => resolver.root().to_path_buf(),
    };

    let meta = prims.stat(&dir).map_err(FsError::io_with("list", &dir))?;
    if !meta.is_dir() {
        return Err(FsError::NotADirectory(dir));
    }

    let hits = if recursive {
        prims.walk(&dir)
    } else {
        prims.glob(&dir)
    }
    .map_err(FsError::io_with("list", &dir))?;

    let total = hits.len();
    let mut items = Vec::with_capacity(total);
    for hit in hits {
        let stat = match prims.stat(&hit) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %hit.display(), error = %e, "Dropping entry that could not be stat'ed");
                continue;
            }
        };
        let Some(name) = hit.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if name == "." || name == ".." {
            continue;
        }
        items.push(ContentItem {
            name,
            path: resolver.resolve(&hit),
            kind: if stat.is_dir() {
                ItemType::Directory
            } else {
                ItemType::File
            },
        });
    }

    debug!(
        dir = %dir.display(),
        recursive,
        found = total,
        listed = items.len(),
        "Listed directory contents"
    );
    Ok(items)
}
