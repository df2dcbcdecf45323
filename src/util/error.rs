//! Error types for the vrma library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for container parsing operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid magic bytes at start of file
    #[error("Invalid GLB file: expected glTF magic bytes")]
    InvalidMagic,

    /// Unsupported container format version
    #[error("Unsupported GLB version: {0}")]
    UnsupportedVersion(u32),

    /// File is truncated or corrupted
    #[error("Unexpected end of file at position {0}")]
    UnexpectedEof(u64),

    /// Invalid chunk layout in file
    #[error("Invalid chunk structure: {0}")]
    InvalidChunk(String),

    /// Container has no JSON chunk
    #[error("Missing JSON chunk")]
    MissingJsonChunk,

    /// JSON chunk could not be decoded into a document
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid chunk error.
    pub fn chunk(msg: impl Into<String>) -> Self {
        Self::InvalidChunk(msg.into())
    }
}

/// Result type alias for container parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::InvalidMagic;
        assert!(e.to_string().contains("magic"));

        let e = Error::UnsupportedVersion(1);
        assert!(e.to_string().contains("1"));

        let e = Error::chunk("first chunk must be JSON");
        assert!(e.to_string().contains("JSON"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
