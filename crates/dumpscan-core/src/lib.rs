//! # dumpscan-core
//!
//! Core library for the dumpscan memory dump search tool.
//!
//! This crate provides:
//! - Hex pattern parsing and validation
//! - Chunked sequential reads over files larger than available memory
//! - Boundary-stitched pattern scanning with absolute offset reporting
//! - Nth non-zero byte search
//!
//! Scans are streaming: memory use is bounded by the configured chunk size
//! plus the pattern length, regardless of file size.

pub mod error;
pub mod nonzero;
pub mod pattern;
pub mod scan;

pub use error::{Error, Result};
pub use nonzero::find_nth_nonzero;
pub use pattern::Pattern;
pub use scan::{
    BoundaryStitcher, Chunk, ChunkSource, DEFAULT_CHUNK_SIZE, Matches, Occurrences, Scanner,
    StitchedBuffer,
};
