//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output: colored messages,
//! the live console reporter that receives organizer events, and the
//! folder/count summary table. Keeping presentation here means the core
//! engine never prints anything itself.

use crate::observer::OrganizeObserver;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a spinner that counts processed directory entries.
    ///
    /// The spinner animates on a background tick while the organizer's
    /// blocking pass runs; live notices should be routed through
    /// [`ProgressBar::println`] so they don't clobber it.
    pub fn create_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {pos} entries processed")
                .expect("Invalid spinner template"),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Prints a summary table of moved-file counts per destination folder.
    pub fn summary_table(folder_counts: &HashMap<String, usize>, total_moved: usize) {
        Self::header("SUMMARY");

        // Sort folders for consistent output
        let mut folders: Vec<_> = folder_counts.iter().collect();
        folders.sort_by_key(|&(name, _)| name);

        let max_folder_len = folders
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(6); // At least "Folder" width

        println!(
            "{} | {}",
            format!("{:<width$}", "Folder", width = max_folder_len).bold(),
            "Files".bold()
        );
        println!("{}", "-".repeat(max_folder_len + 10));

        for (folder, count) in &folders {
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                folder,
                count.to_string().green(),
                file_word,
                width = max_folder_len
            );
        }

        println!("{}", "-".repeat(max_folder_len + 10));
        println!(
            "{} | {} {}",
            format!("{:<width$}", "Total", width = max_folder_len).bold(),
            total_moved.to_string().green().bold(),
            if total_moved == 1 { "file" } else { "files" }
        );
    }
}

/// Console implementation of [`OrganizeObserver`].
///
/// Emits `timestamp | LEVEL | message` lines for each organizer event,
/// routed through a spinner so the live progress display and the notices
/// coexist. Call [`ConsoleReporter::finish`] once the run completes to
/// clear the spinner.
pub struct ConsoleReporter {
    spinner: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: OutputFormatter::create_spinner(),
        }
    }

    /// Clears the spinner once the organizer pass has finished.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn log(&self, level: ColoredString, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        self.spinner
            .println(format!("{} | {} | {}", timestamp, level, message));
        self.spinner.inc(1);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizeObserver for ConsoleReporter {
    fn non_file_skipped(&self, path: &Path) {
        self.log(
            level_tag("DEBUG").dimmed(),
            &format!("Skipping non-file: {}", display_name(path)),
        );
    }

    fn file_moving(&self, path: &Path, folder: &str, dry_run: bool) {
        let suffix = if dry_run { " (dry run)" } else { "" };
        self.log(
            level_tag("INFO").cyan(),
            &format!(
                "Moving file: {} -> {}/{}",
                display_name(path),
                folder,
                suffix
            ),
        );
    }

    fn collision_skipped(&self, _path: &Path, destination: &Path) {
        self.log(
            level_tag("WARN").yellow(),
            &format!("File already exists, skipping: {}", display_name(destination)),
        );
    }

    fn invalid_directory(&self, path: &Path) {
        self.log(
            level_tag("ERROR").red(),
            &format!("Invalid directory: {}", path.display()),
        );
    }
}

/// Pads a level name to a fixed width before coloring, so the columns line
/// up regardless of the ANSI escapes.
fn level_tag(level: &str) -> String {
    format!("{:<5}", level)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
