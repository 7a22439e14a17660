//! Per-file rename pipeline: derive a name from metadata, then move
//! the file with collision avoidance.
//!
//! Every file reaches exactly one terminal [`Outcome`]; no outcome is
//! ever fatal to the run. The loop in [`run`] processes one file fully
//! before looking at the next.

use crate::console::Console;
use crate::error::RenameError;
use crate::metadata::{self, BookMetadata};
use crate::sanitize::sanitize_filename;
use crate::scanner;
use std::fs;
use std::path::Path;

/// Creator value that publishing tools emit when the author is not
/// actually known; treated the same as an absent creator.
const UNKNOWN_CREATOR: &str = "Unknown";

/// Terminal result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File was renamed from its original name to the derived name.
    Renamed { from: String, to: String },

    /// Metadata held no usable title; file left untouched.
    SkippedNoTitle { file: String },

    /// The derived name is already taken in the file's directory;
    /// both files left untouched.
    AlreadyExists { target: String },

    /// Extraction or the filesystem failed; file left untouched.
    Failed { file: String, message: String },
}

/// Counters for a completed scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Renamed { .. } => self.renamed += 1,
            Outcome::SkippedNoTitle { .. } | Outcome::AlreadyExists { .. } => self.skipped += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Derives the target filename for the given metadata.
///
/// Returns `None` when there is no title or the title sanitizes to an
/// empty string. A creator that is absent, sanitizes empty, or equals
/// the literal `Unknown` contributes no author segment.
pub fn derive_filename(meta: &BookMetadata) -> Option<String> {
    let title = sanitize_filename(meta.title.as_deref()?);
    if title.is_empty() {
        return None;
    }

    let author = meta
        .creator
        .as_deref()
        .map(sanitize_filename)
        .filter(|a| !a.is_empty() && a != UNKNOWN_CREATOR);

    Some(match author {
        Some(author) => format!("{author}__{title}.epub"),
        None => format!("{title}.epub"),
    })
}

/// Runs the full pipeline for one file and returns its outcome.
pub fn process_file(path: &Path) -> Outcome {
    let file = display_name(path);

    let meta = match metadata::extract(path) {
        Ok(meta) => meta,
        Err(e) => {
            return Outcome::Failed {
                file,
                message: e.to_string(),
            };
        }
    };

    let Some(new_name) = derive_filename(&meta) else {
        return Outcome::SkippedNoTitle { file };
    };

    let target = path.with_file_name(&new_name);
    match execute_rename(path, &target) {
        Ok(true) => Outcome::Renamed {
            from: file,
            to: new_name,
        },
        Ok(false) => Outcome::AlreadyExists { target: new_name },
        Err(e) => Outcome::Failed {
            file,
            message: e.to_string(),
        },
    }
}

/// Moves `source` to `target` unless `target` is already occupied.
///
/// Returns `Ok(false)` on a collision. The existence check and the
/// rename are not atomic as a unit; a file appearing in between shows
/// up as a rename error, which callers report like any other failure.
fn execute_rename(source: &Path, target: &Path) -> Result<bool, RenameError> {
    if target.try_exists()? {
        return Ok(false);
    }

    fs::rename(source, target)?;
    Ok(true)
}

/// Scans `root` and processes every candidate sequentially, printing
/// one diagnostic line per file.
///
/// Per-file failures are reported and swallowed; the scan always runs
/// to completion.
pub fn run(root: &Path, recursive: bool, console: &Console) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in scanner::scan(root, recursive) {
        let outcome = process_file(&path);
        report(console, &outcome);
        summary.record(&outcome);
    }

    summary
}

fn report(console: &Console, outcome: &Outcome) {
    match outcome {
        Outcome::Renamed { from, to } => console.renamed(from, to),
        Outcome::SkippedNoTitle { file } => console.skipped_no_title(file),
        Outcome::AlreadyExists { target } => console.already_exists(target),
        Outcome::Failed { file, message } => console.processing_error(file, message),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: Option<&str>, creator: Option<&str>) -> BookMetadata {
        BookMetadata {
            title: title.map(str::to_string),
            creator: creator.map(str::to_string),
        }
    }

    #[test]
    fn test_derive_with_author_and_title() {
        assert_eq!(
            derive_filename(&meta(Some("My Book"), Some("Jane Doe"))),
            Some("Jane_Doe__My_Book.epub".to_string())
        );
    }

    #[test]
    fn test_derive_title_only() {
        assert_eq!(
            derive_filename(&meta(Some("My Book"), None)),
            Some("My_Book.epub".to_string())
        );
    }

    #[test]
    fn test_derive_unknown_author_dropped() {
        assert_eq!(
            derive_filename(&meta(Some("My Book"), Some("Unknown"))),
            Some("My_Book.epub".to_string())
        );
    }

    #[test]
    fn test_derive_author_sanitizing_empty_dropped() {
        assert_eq!(
            derive_filename(&meta(Some("My Book"), Some("..."))),
            Some("My_Book.epub".to_string())
        );
    }

    #[test]
    fn test_derive_no_title() {
        assert_eq!(derive_filename(&meta(None, Some("Jane Doe"))), None);
    }

    #[test]
    fn test_derive_title_sanitizes_to_empty() {
        assert_eq!(derive_filename(&meta(Some("..."), Some("Jane Doe"))), None);
    }

    #[test]
    fn test_derive_sanitizes_punctuation() {
        assert_eq!(
            derive_filename(&meta(Some("Report, Final."), None)),
            Some("Report_Final.epub".to_string())
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(&Outcome::Renamed {
            from: "a".into(),
            to: "b".into(),
        });
        summary.record(&Outcome::SkippedNoTitle { file: "c".into() });
        summary.record(&Outcome::AlreadyExists { target: "d".into() });
        summary.record(&Outcome::Failed {
            file: "e".into(),
            message: "boom".into(),
        });

        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
    }
}
