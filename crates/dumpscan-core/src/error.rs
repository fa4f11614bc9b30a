use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid hex pattern: {0}")]
    InvalidPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error was raised by pattern validation
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Error::InvalidPattern(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_error_is_invalid_pattern() {
        let err = Error::InvalidPattern("odd length".to_string());
        assert!(err.is_invalid_pattern());
        assert!(!err.is_not_found());
    }
}
