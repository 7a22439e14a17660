//! Console output formatting with ANSI color support.
//!
//! Provides styled terminal output with automatic TTY detection
//! and respect for the NO_COLOR environment variable. Per-file
//! outcome diagnostics always go to stdout, one line each; styling
//! only wraps the filename segments, so the plain text of every
//! line is stable whether or not colors are enabled.

use std::io::{self, IsTerminal};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
}

impl Style {
    /// Returns the ANSI escape code for this style.
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output handler with color support detection.
#[derive(Debug)]
pub struct Console {
    colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new Console instance, detecting color support.
    ///
    /// Colors are disabled if:
    /// - The `NO_COLOR` environment variable is set
    /// - stdout is not a terminal (TTY)
    pub fn new() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal();

        Self { colors_enabled }
    }

    /// Creates a Console with colors explicitly enabled or disabled.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
        }
    }

    /// Applies ANSI styles to text if colors are enabled.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        let styled = self.style(label, &[color, Style::Bold]);
        format!("[{}]", styled)
    }

    /// Prints an info message with blue `[INFO]` label.
    pub fn info(&self, message: &str) {
        println!("{} {}", self.label("INFO", Style::Blue), message);
    }

    /// Reports a successful rename, naming old and new filenames.
    pub fn renamed(&self, from: &str, to: &str) {
        println!("{}", self.renamed_line(from, to));
    }

    /// Reports a file skipped because no usable title was found.
    pub fn skipped_no_title(&self, file: &str) {
        println!("{}", self.skipped_no_title_line(file));
    }

    /// Reports a rename skipped because the target filename is taken.
    pub fn already_exists(&self, target: &str) {
        println!("{}", self.already_exists_line(target));
    }

    /// Reports a per-file processing failure.
    pub fn processing_error(&self, file: &str, message: &str) {
        println!("{}", self.processing_error_line(file, message));
    }

    fn renamed_line(&self, from: &str, to: &str) -> String {
        format!(
            "✅ Renamed: {} → {}",
            self.style(from, &[Style::Dim]),
            self.style(to, &[Style::Green, Style::Bold]),
        )
    }

    fn skipped_no_title_line(&self, file: &str) -> String {
        format!(
            "⚠️ Skipped (title not found): {}",
            self.style(file, &[Style::Yellow]),
        )
    }

    fn already_exists_line(&self, target: &str) -> String {
        format!(
            "❌ File already exists: {}",
            self.style(target, &[Style::Red]),
        )
    }

    fn processing_error_line(&self, file: &str, message: &str) -> String {
        format!(
            "❌ Error processing {}: {}",
            self.style(file, &[Style::Bold]),
            message,
        )
    }
}
