/// File organization engine.
///
/// This module provides the core single-pass operation: scan a directory's
/// immediate entries, classify each regular file by extension, and move it
/// into the matching subfolder. Destinations that already exist are skipped,
/// never overwritten, and a dry-run mode computes the same report without
/// touching the filesystem.
use crate::extension::ExtensionSet;
use crate::observer::{OrganizeObserver, SilentObserver};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A file that was moved, or would be during a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct MovedFile {
    /// The path of the file before the move.
    pub path: PathBuf,
    /// The name of the extension folder the file was assigned to.
    pub folder: String,
}

/// Outcome of one organization pass.
///
/// Every regular file directly under the base directory lands in exactly
/// one of the two lists, in the directory listing's native order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    /// Files relocated into their extension folders.
    pub moved: Vec<MovedFile>,
    /// Files left untouched because their destination already exists.
    pub skipped: Vec<PathBuf>,
}

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The base path does not exist or is not a directory.
    InvalidDirectory { path: PathBuf },
    /// The base directory listing could not be read.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create an extension directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file into its extension directory.
    FileMoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirectory { path } => {
                write!(f, "The path '{}' is not a valid directory", path.display())
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes files by moving them into extension subdirectories.
///
/// This struct handles the logistics of organizing a base directory: it
/// validates the directory, classifies its files against an allow-set of
/// extensions, creates destination folders as needed, and moves files into
/// them.
pub struct Organizer;

impl Organizer {
    /// Organizes the files directly under `base_path` without reporting
    /// progress anywhere.
    ///
    /// Equivalent to [`Organizer::organize_with_observer`] with the silent
    /// observer.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use extidy::extension::ExtensionSet;
    /// use extidy::file_organizer::Organizer;
    /// use std::path::Path;
    ///
    /// let extensions = ExtensionSet::default();
    /// let report = Organizer::organize(Path::new("/path/to/downloads"), &extensions, false);
    ///
    /// match report {
    ///     Ok(report) => println!("Moved {} files", report.moved.len()),
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn organize(
        base_path: &Path,
        extensions: &ExtensionSet,
        dry_run: bool,
    ) -> OrganizeResult<OrganizeReport> {
        Self::organize_with_observer(base_path, extensions, dry_run, &SilentObserver)
    }

    /// Organizes the files directly under `base_path`, reporting each event
    /// to the given observer.
    ///
    /// The scan is a single sequential pass over the directory's immediate
    /// children, in whatever order the listing yields them. Non-file entries
    /// are skipped. Each file is assigned the folder named after its
    /// lowercased extension when that extension is in `extensions`, and the
    /// `no_extension` folder otherwise. A file whose destination path
    /// already exists is recorded as skipped and left in place.
    ///
    /// With `dry_run` set, no folder is created and no file is moved, but
    /// the returned report is identical in content to what a real run would
    /// produce: collision checks still consult the actual filesystem.
    ///
    /// # Errors
    ///
    /// Returns `OrganizeError::InvalidDirectory` before touching anything
    /// when `base_path` is not an existing directory. A folder-creation or
    /// move failure mid-scan aborts the remaining iteration and propagates;
    /// files already moved stay moved.
    pub fn organize_with_observer(
        base_path: &Path,
        extensions: &ExtensionSet,
        dry_run: bool,
        observer: &dyn OrganizeObserver,
    ) -> OrganizeResult<OrganizeReport> {
        if !base_path.is_dir() {
            observer.invalid_directory(base_path);
            return Err(OrganizeError::InvalidDirectory {
                path: base_path.to_path_buf(),
            });
        }

        let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::DirectoryReadFailed {
            path: base_path.to_path_buf(),
            source: e,
        })?;

        let mut report = OrganizeReport::default();

        for entry in entries.flatten() {
            let source_path = entry.path();

            // is_file() follows symlinks, so a symlink to a regular file is
            // organized like the file itself.
            if !source_path.is_file() {
                observer.non_file_skipped(&source_path);
                continue;
            }

            let folder_name = extensions.classify(&source_path);
            let target_folder = base_path.join(&folder_name);
            let target_path = target_folder.join(entry.file_name());

            // The collision check consults the real filesystem in dry runs
            // too, so both modes report the same outcome.
            if target_path.exists() {
                observer.collision_skipped(&source_path, &target_path);
                report.skipped.push(source_path);
                continue;
            }

            observer.file_moving(&source_path, &folder_name, dry_run);

            if !dry_run {
                fs::create_dir_all(&target_folder).map_err(|e| {
                    OrganizeError::DirectoryCreationFailed {
                        path: target_folder.clone(),
                        source: e,
                    }
                })?;

                fs::rename(&source_path, &target_path).map_err(|e| {
                    OrganizeError::FileMoveFailed {
                        source: source_path.clone(),
                        destination: target_path.clone(),
                        source_error: e,
                    }
                })?;
            }

            report.moved.push(MovedFile {
                path: source_path,
                folder: folder_name,
            });
        }

        Ok(report)
    }
}
