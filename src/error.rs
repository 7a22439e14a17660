//! Error types for the epub-renamer application.
//!
//! Uses `thiserror` for structured error definitions that provide
//! clear context about what went wrong.

use thiserror::Error;

/// Error type for metadata extraction.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The EPUB parser rejected the file (corrupt archive, missing
    /// container, malformed OPF, or an underlying I/O failure)
    #[error("failed to read EPUB: {0}")]
    Parse(String),
}

/// Error type for rename execution.
#[derive(Error, Debug)]
pub enum RenameError {
    /// The target existence check or the rename itself failed
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
