//! Free functions rooted at the process working directory.
//!
//! Each call reads the working directory at call time and delegates to a
//! short-lived [`ScopedDir`], so resolution rules are identical to the handle's.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::list::ContentItem;
use super::primitives::Stat;
use super::scoped::{extension_of, ScopedDir};
use crate::config::WriteOptions;
use crate::errors::Result;

fn here() -> Result<ScopedDir> {
    ScopedDir::current()
}

pub fn resolve(path: impl AsRef<Path>) -> Result<PathBuf> {
    Ok(here()?.resolve(path))
}

pub fn copy(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
    here()?.copy(src, dest)
}

pub fn create_dir(path: impl AsRef<Path>, opts: WriteOptions) -> Result<()> {
    here()?.create_dir(path, opts)
}

pub fn delete(path: impl AsRef<Path>) -> Result<()> {
    here()?.delete(path)
}

/// Pure: does not depend on the working directory.
pub fn get_extension(path: impl AsRef<Path>) -> String {
    extension_of(path.as_ref())
}

pub fn get_size(path: impl AsRef<Path>) -> Result<u64> {
    here()?.get_size(path)
}

/// False when the working directory itself cannot be determined.
pub fn exists(path: impl AsRef<Path>) -> bool {
    here().map(|d| d.exists(path)).unwrap_or(false)
}

pub fn stat(path: impl AsRef<Path>) -> Result<Stat> {
    here()?.stat(path)
}

pub fn list_contents(target: Option<&Path>, recursive: bool) -> Result<Vec<ContentItem>> {
    here()?.list_contents(target, recursive)
}

pub fn read(path: impl AsRef<Path>) -> Result<String> {
    here()?.read(path)
}

pub fn update(path: impl AsRef<Path>, text: &str) -> Result<()> {
    here()?.update(path, text)
}

pub fn write(path: impl AsRef<Path>, text: &str, opts: WriteOptions) -> Result<()> {
    here()?.write(path, text, opts)
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    here()?.read_json(path)
}

pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    opts: WriteOptions,
) -> Result<()> {
    here()?.write_json(path, value, opts)
}
