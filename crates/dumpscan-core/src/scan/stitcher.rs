use super::source::Chunk;

/// Buffer actually scanned in one round: the carry-over from the previous
/// round followed by the bytes of a freshly read chunk.
#[derive(Debug)]
pub struct StitchedBuffer {
    data: Vec<u8>,
    carry_len: usize,
    absolute_base: u64,
}

impl StitchedBuffer {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of leading bytes that were already present in the previous
    /// round's buffer.
    pub fn carry_len(&self) -> usize {
        self.carry_len
    }

    /// Absolute stream offset of `data()[0]`.
    pub fn absolute_base(&self) -> u64 {
        self.absolute_base
    }
}

/// Carries trailing bytes across chunk boundaries.
///
/// A match of length `L` can begin at most `L - 1` bytes before a chunk
/// boundary, so retaining exactly that many tail bytes is the minimum
/// window that catches every boundary-spanning occurrence. The tail is
/// taken from the stitched buffer, not the raw chunk, which keeps the scan
/// correct even when the pattern is longer than the chunk size and a match
/// spans several boundaries.
#[derive(Debug)]
pub struct BoundaryStitcher {
    carry: Vec<u8>,
    overlap: usize,
}

impl BoundaryStitcher {
    /// `pattern_len` is the length of the pattern the scan will match.
    pub fn new(pattern_len: usize) -> Self {
        assert!(pattern_len > 0, "pattern must be non-empty");
        Self {
            carry: Vec::new(),
            overlap: pattern_len - 1,
        }
    }

    /// Prepend the stored carry-over to `chunk` and retain the new tail for
    /// the following call.
    ///
    /// Invariant: `carry_len() < pattern_len` for every returned buffer.
    pub fn step(&mut self, chunk: Chunk) -> StitchedBuffer {
        let carry_len = self.carry.len();
        let absolute_base = chunk.start_offset - carry_len as u64;

        let mut data = std::mem::take(&mut self.carry);
        data.extend_from_slice(&chunk.data);

        let keep = self.overlap.min(data.len());
        self.carry.extend_from_slice(&data[data.len() - keep..]);

        StitchedBuffer {
            data,
            carry_len,
            absolute_base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(data: &[u8], start_offset: u64) -> Chunk {
        Chunk {
            data: data.to_vec(),
            start_offset,
        }
    }

    #[test]
    fn test_first_step_has_no_carry() {
        let mut stitcher = BoundaryStitcher::new(3);
        let buffer = stitcher.step(chunk(&[1, 2, 3, 4], 0));

        assert_eq!(buffer.data(), &[1, 2, 3, 4]);
        assert_eq!(buffer.carry_len(), 0);
        assert_eq!(buffer.absolute_base(), 0);
    }

    #[test]
    fn test_second_step_prepends_tail_of_first() {
        let mut stitcher = BoundaryStitcher::new(3);
        stitcher.step(chunk(&[1, 2, 3, 4], 0));
        let buffer = stitcher.step(chunk(&[5, 6], 4));

        // Overlap window is pattern_len - 1 = 2 bytes: [3, 4].
        assert_eq!(buffer.data(), &[3, 4, 5, 6]);
        assert_eq!(buffer.carry_len(), 2);
        assert_eq!(buffer.absolute_base(), 2);
    }

    #[test]
    fn test_carry_bounded_by_short_chunks() {
        // Pattern longer than the chunks being fed in.
        let mut stitcher = BoundaryStitcher::new(4);

        let first = stitcher.step(chunk(&[1], 0));
        assert_eq!(first.data(), &[1]);

        let second = stitcher.step(chunk(&[2], 1));
        assert_eq!(second.data(), &[1, 2]);
        assert_eq!(second.carry_len(), 1);
        assert_eq!(second.absolute_base(), 0);

        let third = stitcher.step(chunk(&[3], 2));
        assert_eq!(third.data(), &[1, 2, 3]);
        assert_eq!(third.carry_len(), 2);
        assert_eq!(third.absolute_base(), 0);

        // Carry saturates at pattern_len - 1 = 3 from here on.
        let fourth = stitcher.step(chunk(&[4], 3));
        assert_eq!(fourth.data(), &[1, 2, 3, 4]);
        assert_eq!(fourth.carry_len(), 3);
        assert_eq!(fourth.absolute_base(), 0);

        let fifth = stitcher.step(chunk(&[5], 4));
        assert_eq!(fifth.data(), &[2, 3, 4, 5]);
        assert_eq!(fifth.carry_len(), 3);
        assert_eq!(fifth.absolute_base(), 1);
    }

    #[test]
    fn test_single_byte_pattern_carries_nothing() {
        let mut stitcher = BoundaryStitcher::new(1);
        stitcher.step(chunk(&[1, 2], 0));
        let buffer = stitcher.step(chunk(&[3, 4], 2));

        assert_eq!(buffer.data(), &[3, 4]);
        assert_eq!(buffer.carry_len(), 0);
        assert_eq!(buffer.absolute_base(), 2);
    }
}
