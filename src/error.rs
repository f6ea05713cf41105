use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating or writing test vectors.
#[derive(Debug, Error)]
pub enum Error {
    /// The output file could not be created or truncated.
    #[error("cannot open {}: {source}", path.display())]
    Io {
        /// Path the caller asked for.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// Writing or flushing the serialized vectors failed.
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
    /// A test case could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[source] serde_json::Error),
    /// A hash parameter is longer than BLAKE2s allows.
    #[error("blake2s: {what} too large: got {len} bytes, max {max}")]
    InvalidParameter {
        /// Which parameter: key, salt or persona.
        what: &'static str,
        /// Supplied length in bytes.
        len: usize,
        /// Maximum length in bytes.
        max: usize,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        // The serializer reports failures of the underlying writer as JSON errors.
        if e.is_io() {
            Error::Write(e.into())
        } else {
            Error::Json(e)
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
