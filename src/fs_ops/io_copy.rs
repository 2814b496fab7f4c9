//! Streaming copy between two open primitive handles.
//!
//! Snapshot semantics: the source is read once from start to EOF; if it grows
//! concurrently, the additional bytes are not included. The destination is
//! flushed before returning so a buffered write error is not lost on drop.

use std::io::{self, Read, Write};

/// io::copy followed by an explicit flush. Returns the number of bytes copied.
pub(super) fn pump(reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<u64> {
    let bytes = io::copy(reader, writer)?;
    writer.flush()?;
    Ok(bytes)
}
