//! Pattern search command.

use std::path::Path;

use anyhow::Result;
use dumpscan_core::{Pattern, Scanner};
use tracing::info;

/// Scan the dump for a hex pattern, printing one line per match.
///
/// The match lines and the completion line are a compatibility surface for
/// tooling that parses them; their exact text must not change.
pub fn run(dump: &Path, hex_pattern: &str, chunk_size: usize) -> Result<()> {
    // The pattern is validated before the dump is opened.
    let pattern = Pattern::from_hex(strip_hex_prefix(hex_pattern))?;
    let scanner = Scanner::new(pattern).with_chunk_size(chunk_size);

    let mut count = 0u64;
    for offset in scanner.scan_file(dump)? {
        println!("Pattern found at offset: {:#x}", offset?);
        count += 1;
    }

    println!("Search completed for file {}.", dump.display());
    info!("Scan finished with {} match(es)", count);

    Ok(())
}

/// Accept patterns written with a leading `0x`/`0X`, as most hex tooling
/// emits them.
fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xdeadbeef"), "deadbeef");
        assert_eq!(strip_hex_prefix("0XDEADBEEF"), "DEADBEEF");
        assert_eq!(strip_hex_prefix("deadbeef"), "deadbeef");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn test_run_rejects_pattern_before_opening_file() {
        // Odd-length pattern fails even though the path does not exist.
        let err = run(Path::new("/nonexistent/dump.bin"), "abc", 1024).unwrap_err();
        let core_err = err.downcast_ref::<dumpscan_core::Error>().unwrap();
        assert!(core_err.is_invalid_pattern());
    }

    #[test]
    fn test_run_missing_file_with_valid_pattern() {
        let err = run(Path::new("/nonexistent/dump.bin"), "ab", 1024).unwrap_err();
        let core_err = err.downcast_ref::<dumpscan_core::Error>().unwrap();
        assert!(core_err.is_not_found());
    }

    #[test]
    fn test_run_completes_on_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x00\x00\xAA\xBB\x00").unwrap();
        file.flush().unwrap();

        run(file.path(), "aabb", 2).unwrap();
        run(file.path(), "0xAABB", 2).unwrap();
        // Zero matches is still a successful scan.
        run(file.path(), "deadbeef", 2).unwrap();
    }
}
