use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// One block of bytes read sequentially from the underlying stream.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Raw bytes, at most the configured chunk size.
    pub data: Vec<u8>,
    /// Absolute offset of `data[0]` in the underlying stream.
    pub start_offset: u64,
}

/// Sequential bounded-size reader over a byte stream.
///
/// The source never seeks; each call to [`ChunkSource::next_chunk`] delivers
/// the next run of bytes and records where in the stream it began. The
/// underlying handle is released when the source is dropped, whether the
/// stream was exhausted or abandoned early.
#[derive(Debug)]
pub struct ChunkSource<R> {
    reader: R,
    chunk_size: usize,
    position: u64,
    exhausted: bool,
}

impl ChunkSource<File> {
    /// Open a file for chunked reading.
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file, chunk_size))
    }
}

impl<R: Read> ChunkSource<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            reader,
            chunk_size,
            position: 0,
            exhausted: false,
        }
    }

    /// Read the next chunk. Returns `Ok(None)` once the stream is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut data = Vec::new();
        let read = (&mut self.reader)
            .take(self.chunk_size as u64)
            .read_to_end(&mut data)?;

        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        // A short read means read_to_end hit end of stream.
        if read < self.chunk_size {
            self.exhausted = true;
        }

        let chunk = Chunk {
            data,
            start_offset: self.position,
        };
        self.position += read as u64;

        Ok(Some(chunk))
    }

    /// Total raw bytes delivered so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}
