//! Error types for INI loading and saving.
//!
//! Parsing itself never fails: blank and malformed lines are skipped, and every
//! "not found" outcome of the mutation API is reported through a `bool` or an
//! `Option`. The errors here only cover the edges of the pipeline, where bytes
//! come in from or go out to the outside world.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reader/writer failures and file access failures
//! - **Missing filename**: `save()` called before any filename was known
//! - **Encoding**: input bytes that are not valid UTF-8
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{Error, Ini};
//!
//! let mut ini = Ini::new();
//! let err = ini.save().unwrap_err();
//! assert!(matches!(err, Error::MissingFilename));
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Represents all possible errors that can occur while loading or saving INI text.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading from a reader or writing to a writer
    #[error("IO error: {0}")]
    Io(String),

    /// A file could not be read or written
    #[error("IO error on {}: {message}", .path.display())]
    File {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    /// `save()` was called but no filename was ever given
    #[error("no filename to save to: load from a file or call save_as() first")]
    MissingFilename,

    /// Input bytes were not valid UTF-8
    #[error("invalid UTF-8 in INI input after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
}

impl Error {
    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a file error, keeping the [`io::ErrorKind`] of the underlying failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Error;
    /// use std::io;
    ///
    /// let source = io::Error::new(io::ErrorKind::NotFound, "no such file");
    /// let err = Error::file("missing.ini", &source);
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    /// assert!(err.to_string().contains("missing.ini"));
    /// ```
    pub fn file(path: impl AsRef<Path>, source: &io::Error) -> Self {
        Error::File {
            path: path.as_ref().to_path_buf(),
            kind: source.kind(),
            message: source.to_string(),
        }
    }

    /// Returns the underlying [`io::ErrorKind`] for file errors.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::File { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_filename_message() {
        let msg = Error::MissingFilename.to_string();
        assert!(msg.contains("save_as"));
    }

    #[test]
    fn test_utf8_conversion() {
        let bytes = [b'a', 0xff, b'b'];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        match err {
            Error::InvalidUtf8 { valid_up_to } => assert_eq!(valid_up_to, 1),
            other => panic!("Expected InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_io_kind_only_for_files() {
        assert_eq!(Error::io("broken pipe").io_kind(), None);
        assert_eq!(Error::MissingFilename.io_kind(), None);
        assert_eq!(Error::InvalidUtf8 { valid_up_to: 0 }.io_kind(), None);
    }
}
