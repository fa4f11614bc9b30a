use std::fs::File;
use std::io::Read;
use std::path::Path;

use memchr::memmem;
use tracing::{debug, trace};

use super::matcher;
use super::source::ChunkSource;
use super::stitcher::{BoundaryStitcher, StitchedBuffer};
use super::DEFAULT_CHUNK_SIZE;
use crate::error::Result;
use crate::pattern::Pattern;

/// Streaming pattern scan over a byte source.
///
/// Composes the chunk source, boundary stitcher and matcher into a single
/// sequential pass. One chunk is fully read and scanned before the next
/// read begins; peak memory is chunk size plus pattern length minus one.
pub struct Scanner {
    pattern: Pattern,
    chunk_size: usize,
}

impl Scanner {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the read chunk size (useful for tests and bounded-memory
    /// environments; correctness does not depend on the value).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Scan a file, yielding absolute match offsets lazily.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<Matches<File>> {
        let path = path.as_ref();
        debug!(
            "Scanning {} for pattern {} (chunk size {} bytes)",
            path.display(),
            self.pattern,
            self.chunk_size
        );
        let source = ChunkSource::open(path, self.chunk_size)?;
        Ok(self.scan(source))
    }

    /// Scan an arbitrary reader, yielding absolute match offsets lazily.
    pub fn scan_reader<R: Read>(&self, reader: R) -> Matches<R> {
        self.scan(ChunkSource::new(reader, self.chunk_size))
    }

    fn scan<R: Read>(&self, source: ChunkSource<R>) -> Matches<R> {
        Matches {
            source,
            stitcher: BoundaryStitcher::new(self.pattern.len()),
            finder: memmem::Finder::new(self.pattern.as_bytes()).into_owned(),
            pattern_len: self.pattern.len(),
            current: None,
            at: 0,
            done: false,
        }
    }
}

/// Lazy iterator over the absolute offsets at which the pattern occurs.
///
/// Offsets are strictly increasing and each true occurrence is yielded
/// exactly once, regardless of where chunk boundaries fall. A read error
/// is yielded once and fuses the iterator. Dropping the iterator at any
/// point closes the underlying source.
#[derive(Debug)]
pub struct Matches<R> {
    source: ChunkSource<R>,
    stitcher: BoundaryStitcher,
    finder: memmem::Finder<'static>,
    pattern_len: usize,
    current: Option<StitchedBuffer>,
    at: usize,
    done: bool,
}

impl<R: Read> Iterator for Matches<R> {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            if let Some(buffer) = &self.current {
                while let Some(local) = matcher::find_from(buffer.data(), &self.finder, self.at) {
                    self.at = local + 1;

                    // A hit ending inside the carry-over was already
                    // reported while the previous buffer was scanned.
                    if local + self.pattern_len <= buffer.carry_len() {
                        continue;
                    }

                    return Some(Ok(buffer.absolute_base() + local as u64));
                }
            }

            self.current = None;
            self.at = 0;

            match self.source.next_chunk() {
                Ok(Some(chunk)) => {
                    trace!(
                        "Read chunk at offset {:#x} ({} bytes)",
                        chunk.start_offset,
                        chunk.data.len()
                    );
                    self.current = Some(self.stitcher.step(chunk));
                }
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
