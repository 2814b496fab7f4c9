//! JSON read/write on top of the scoped handle (serde_json).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use super::primitives::Primitives;
use super::scoped::ScopedDir;
use crate::config::WriteOptions;
use crate::errors::{FsError, Result};

impl<P: Primitives> ScopedDir<P> {
    /// Decode the JSON document at `path` into `T`.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let bytes = self.read_bytes(&path)?;
        serde_json::from_slice(&bytes).map_err(|source| FsError::Parse {
            path: self.resolve(&path),
            source,
        })
    }

    /// Encode `value` as compact JSON and overwrite `path` with it.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        value: &T,
        opts: WriteOptions,
    ) -> Result<()> {
        let body = serde_json::to_vec(value).map_err(|source| FsError::Encode {
            path: self.resolve(&path),
            source,
        })?;
        self.write_bytes(path, &body, opts)
    }

    /// Like [`ScopedDir::write_json`] but indented, with a trailing newline.
    pub fn write_json_pretty<T: Serialize + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        value: &T,
        opts: WriteOptions,
    ) -> Result<()> {
        let mut body = serde_json::to_vec_pretty(value).map_err(|source| FsError::Encode {
            path: self.resolve(&path),
            source,
        })?;
        body.push(b'\n');
        self.write_bytes(path, &body, opts)
    }
}
