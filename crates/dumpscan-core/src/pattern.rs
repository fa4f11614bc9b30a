use std::fmt;

use crate::error::{Error, Result};

/// Byte pattern decoded from a hex string.
///
/// Validation happens entirely up front: a `Pattern` always holds at least
/// one byte, so a scan session never has to re-check its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Parse a pattern from hex text (case-insensitive, even length).
    ///
    /// Fails with [`Error::InvalidPattern`] when the text is empty, has an
    /// odd number of characters, or contains a non-hex character. No I/O is
    /// performed here.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidPattern("pattern is empty".to_string()));
        }

        if text.len() % 2 != 0 {
            return Err(Error::InvalidPattern(format!(
                "odd number of characters ({})",
                text.len()
            )));
        }

        if let Some(c) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidPattern(format!(
                "invalid character '{}'",
                c
            )));
        }

        // All characters are ASCII hex digits, so slicing by byte index is safe.
        let mut bytes = Vec::with_capacity(text.len() / 2);
        for i in (0..text.len()).step_by(2) {
            let value = u8::from_str_radix(&text[i..i + 2], 16)
                .map_err(|e| Error::InvalidPattern(format!("invalid pair '{}': {}", &text[i..i + 2], e)))?;
            bytes.push(value);
        }

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        // from_hex rejects empty input, so a constructed pattern never is.
        self.bytes.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
