//! Filesystem operations: modularized.
//!
//! - `resolve`: maps caller paths onto the root
//! - `list`: shallow/recursive content listing
//! - `primitives`: the raw I/O capability set and its local implementation
//! - `scoped`: the root-bound handle exposing every operation
//! - `cwd`: the same operations as free functions rooted at the working directory

pub mod cwd;
pub(crate) mod helpers;
mod io_copy;
pub mod list;
pub mod primitives;
pub mod resolve;
mod scoped;
mod structured;

pub use list::{list_contents, ContentItem, ItemType};
pub use primitives::{EntryKind, LocalPrimitives, Primitives, Stat};
pub use resolve::PathResolver;
pub use scoped::{extension_of, ScopedDir};
