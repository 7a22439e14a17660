//! epub-renamer - renames EPUB files from their embedded metadata.
//!
//! This library provides functionality for:
//! - Scanning a directory (optionally recursively) for `.epub` files
//! - Extracting title/creator metadata via the `epub` crate
//! - Renaming files to a sanitized `Author__Title.epub` form without
//!   ever overwriting an existing file

pub mod console;
pub mod error;
pub mod metadata;
pub mod renamer;
pub mod sanitize;
pub mod scanner;

// Re-export commonly used types
pub use console::Console;
pub use error::{MetadataError, RenameError};
pub use metadata::BookMetadata;
pub use renamer::{Outcome, RunSummary};
pub use sanitize::sanitize_filename;
