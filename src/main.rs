//! epub-renamer CLI - renames EPUB files based on their metadata.

use anyhow::{Result, bail};
use clap::Parser;
use epub_renamer::console::Console;
use epub_renamer::renamer;
use std::path::PathBuf;

/// Rename epub files based on metadata.
#[derive(Parser, Debug)]
#[command(name = "epub-renamer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the folder containing epub files.
    folder: PathBuf,

    /// Rename files in subfolders as well.
    #[arg(short, long)]
    recursive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let console = Console::new();

    // Only argument problems are fatal; everything past this point is
    // reported per file and the scan keeps going.
    if !args.folder.is_dir() {
        bail!("not a directory: {}", args.folder.display());
    }

    let summary = renamer::run(&args.folder, args.recursive, &console);

    console.info(&format!(
        "{} renamed, {} skipped, {} failed",
        summary.renamed, summary.skipped, summary.failed
    ));

    Ok(())
}
