//! Chunked streaming pattern scan pipeline.
//!
//! A scan pulls fixed-size chunks from a [`ChunkSource`], stitches each one
//! to the carry-over retained by a [`BoundaryStitcher`] so matches crossing
//! a chunk boundary are not lost, finds every occurrence with
//! [`Occurrences`], and maps the local hits to absolute file offsets.
//! [`Scanner`] wires the pieces together and exposes the result as a lazy
//! iterator.

mod driver;
mod matcher;
mod source;
mod stitcher;

pub use driver::{Matches, Scanner};
pub use matcher::Occurrences;
pub use source::{Chunk, ChunkSource};
pub use stitcher::{BoundaryStitcher, StitchedBuffer};

/// Chunk size used when none is configured: 4 GiB, large enough that real
/// memory dumps stream in a handful of reads.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024 * 1024;
