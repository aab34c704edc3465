//! Command-line interface module for extidy.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing and validation
//! - Wiring console reporting into the organizer
//! - Rendering the result report (human-readable or JSON)
//! - Fatal-error handling for invalid target directories

use crate::extension::ExtensionSet;
use crate::file_organizer::{OrganizeError, OrganizeReport, Organizer};
use crate::output::{ConsoleReporter, OutputFormatter};
use clap::Parser;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Organize a directory's files into extension-named subfolders.
///
/// Files whose extension is not allow-listed, and files without one, land
/// in the `no_extension` folder. Files that already exist at their
/// destination are skipped, never overwritten.
#[derive(Debug, Parser)]
#[command(name = "extidy", version)]
pub struct Cli {
    /// Directory whose files should be organized.
    pub directory: PathBuf,

    /// Simulate the run without creating folders or moving files.
    #[arg(long)]
    pub dry_run: bool,

    /// Extensions that get their own folder, comma separated (e.g.
    /// `-e txt,png,pdf`). Defaults to a stock set of common extensions.
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Print the report as JSON instead of the human-readable summary.
    #[arg(long)]
    pub json: bool,
}

/// Report shape for `--json` output.
#[derive(Serialize)]
struct JsonReport<'a> {
    dry_run: bool,
    #[serde(flatten)]
    report: &'a OrganizeReport,
}

/// Runs the CLI application with the given parsed arguments.
///
/// An invalid target directory is reported as a fatal log line and the
/// function returns `Ok(())`: the process exits normally in that case.
/// Every other organizer failure propagates to the caller.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use extidy::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["extidy", "/path/to/directory", "--dry-run"]);
/// if let Err(e) = run_cli(&cli) {
///     eprintln!("{}", e);
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    let extensions = if cli.extensions.is_empty() {
        ExtensionSet::default()
    } else {
        ExtensionSet::new(&cli.extensions)
    };

    let result = if cli.json {
        Organizer::organize(&cli.directory, &extensions, cli.dry_run)
    } else {
        if cli.dry_run {
            OutputFormatter::dry_run_notice(&format!(
                "Analyzing contents of: {}",
                cli.directory.display()
            ));
        } else {
            OutputFormatter::info(&format!(
                "Organizing contents of: {}",
                cli.directory.display()
            ));
        }
        let reporter = ConsoleReporter::new();
        let result =
            Organizer::organize_with_observer(&cli.directory, &extensions, cli.dry_run, &reporter);
        reporter.finish();
        result
    };

    let report = match result {
        Ok(report) => report,
        // The one recoverable failure: log it and exit normally.
        Err(OrganizeError::InvalidDirectory { path }) => {
            OutputFormatter::error(&format!(
                "Fatal error: the path '{}' is not a valid directory.",
                path.display()
            ));
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    if cli.json {
        print_json_report(&report, cli.dry_run)
    } else {
        print_report(&report, cli.dry_run);
        Ok(())
    }
}

/// Renders the report as pretty-printed JSON on stdout.
fn print_json_report(report: &OrganizeReport, dry_run: bool) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&JsonReport { dry_run, report })
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Renders the human-readable report: per-file lines, skipped section,
/// summary table, and the closing notice.
fn print_report(report: &OrganizeReport, dry_run: bool) {
    if report.moved.is_empty() && report.skipped.is_empty() {
        OutputFormatter::plain("No files found to organize.");
        return;
    }

    for file in &report.moved {
        let name = file_name_of(&file.path);
        if dry_run {
            OutputFormatter::plain(&format!(" - {} → would move to {}/", name, file.folder));
        } else {
            OutputFormatter::plain(&format!(" - {} ✓ moved to {}/", name, file.folder));
        }
    }

    if !report.skipped.is_empty() {
        OutputFormatter::header("Skipped (already exist at destination):");
        for path in &report.skipped {
            OutputFormatter::warning(&file_name_of(path));
        }
    }

    let mut folder_counts: HashMap<String, usize> = HashMap::new();
    for file in &report.moved {
        *folder_counts.entry(file.folder.clone()).or_insert(0) += 1;
    }
    OutputFormatter::summary_table(&folder_counts, report.moved.len());

    if dry_run {
        OutputFormatter::dry_run_notice("Dry run complete. No files were modified.");
    } else {
        OutputFormatter::success("Organization complete!");
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["extidy", "/tmp/target"]);
        assert_eq!(cli.directory, PathBuf::from("/tmp/target"));
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert!(cli.extensions.is_empty());
    }

    #[test]
    fn test_cli_parses_comma_separated_extensions() {
        let cli = Cli::parse_from(["extidy", "/tmp/target", "-e", "txt,PNG,.pdf"]);
        assert_eq!(cli.extensions, vec!["txt", "PNG", ".pdf"]);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["extidy", "/tmp/target", "--dry-run", "--json"]);
        assert!(cli.dry_run);
        assert!(cli.json);
    }

    #[test]
    fn test_run_cli_invalid_directory_exits_normally() {
        let cli = Cli::parse_from(["extidy", "/non/existent/path"]);
        assert!(run_cli(&cli).is_ok());
    }
}
