//! Nth non-zero byte command.

use std::path::Path;

use anyhow::Result;
use dumpscan_core::{ChunkSource, find_nth_nonzero};

/// Report the absolute offset of the nth non-zero byte in the dump.
///
/// A dump with fewer than `n` non-zero bytes is a completed scan, not a
/// failure; the not-found message goes to stdout and the exit code stays 0.
pub fn run(dump: &Path, n: u64, chunk_size: usize) -> Result<()> {
    let mut source = ChunkSource::open(dump, chunk_size)?;

    match find_nth_nonzero(&mut source, n)? {
        Some(offset) => {
            println!(
                "Occurrence {} of non-zero byte found at offset: {:#x}",
                n, offset
            );
        }
        None => {
            println!("Error: {}-th non-zero byte not found.", n);
        }
    }

    Ok(())
}
