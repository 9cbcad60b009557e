//! Error types for the prescan crate.
//!
//! Malformed markup and unknown labels are not errors: the scanner drops
//! the construct and keeps going. Only table loading and encoding through
//! the replacement codec can fail.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PrescanError {
    /// The encoding table source could not be read.
    #[error("failed to read encoding table {path:?}: {source}")]
    TableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoding table source is not a list of categories of `{name, labels}` encodings.
    #[error("malformed encoding table: {0}")]
    TableFormat(String),

    /// The replacement pseudo-encoding has no encoder.
    #[error("replacement encoding doesn't have an encoder")]
    EncodeUnsupported,
}

/// A convenience `Result` type alias using the crate's `PrescanError` type.
pub type Result<T> = std::result::Result<T, PrescanError>;
