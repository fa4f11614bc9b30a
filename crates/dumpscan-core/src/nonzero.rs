//! Nth non-zero byte search.
//!
//! Streams the dump through a [`ChunkSource`] and reports the absolute
//! offset of the nth byte that is not `0x00`. Useful for locating where
//! real data begins in sparse memory dumps. The predicate is a single
//! byte, so no boundary stitching is involved.

use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::scan::ChunkSource;

/// Find the absolute offset of the `n`th non-zero byte (1-based).
///
/// Returns `Ok(None)` when the stream ends before `n` non-zero bytes have
/// been seen.
pub fn find_nth_nonzero<R: Read>(source: &mut ChunkSource<R>, n: u64) -> Result<Option<u64>> {
    assert!(n > 0, "occurrence count is 1-based");

    let mut seen = 0u64;
    while let Some(chunk) = source.next_chunk()? {
        for (i, &byte) in chunk.data.iter().enumerate() {
            if byte != 0 {
                seen += 1;
                if seen == n {
                    return Ok(Some(chunk.start_offset + i as u64));
                }
            }
        }
    }

    debug!("Stream ended after {} non-zero bytes (wanted {})", seen, n);
    Ok(None)
}
