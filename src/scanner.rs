//! Directory traversal for EPUB candidates.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects the paths of all `.epub` files under `root`.
///
/// When `recursive` is false only the direct children of `root` are
/// considered; subdirectories are never descended into. The match on
/// the `.epub` suffix is case-insensitive. Results are collected
/// eagerly so files renamed later in the run can never re-enter the
/// candidate list. Entries the walker cannot read are skipped.
///
/// No ordering guarantee; callers must not rely on filesystem order.
pub fn scan(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root);
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_epub(path))
        .collect()
}

fn is_epub(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".epub"))
        .unwrap_or(false)
}
