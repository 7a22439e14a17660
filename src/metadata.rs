//! Bibliographic metadata extraction from EPUB files.
//!
//! Thin boundary over the `epub` crate: given a path, produce the
//! first title and creator values or fail. Callers treat failure as
//! a per-file condition, never as a reason to stop a scan.

use crate::error::MetadataError;
use epub::doc::EpubDoc;
use std::path::Path;

/// Title and creator strings as found in the EPUB's OPF metadata.
///
/// Fields hold the first value of the corresponding Dublin Core
/// element, trimmed of surrounding whitespace. Raw in every other
/// respect; sanitization happens at name derivation.
#[derive(Debug, Clone, Default)]
pub struct BookMetadata {
    pub title: Option<String>,
    pub creator: Option<String>,
}

/// Opens the EPUB at `path` and reads its title and creator.
///
/// Multi-valued fields collapse to their first value. A field that is
/// missing or whitespace-only comes back as `None`.
pub fn extract(path: &Path) -> Result<BookMetadata, MetadataError> {
    let doc = EpubDoc::new(path).map_err(|e| MetadataError::Parse(e.to_string()))?;

    Ok(BookMetadata {
        title: clean_field(doc.mdata("title").map(|m| m.value.clone())),
        creator: clean_field(doc.mdata("creator").map(|m| m.value.clone())),
    })
}

fn clean_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
