//! extidy - organize a directory by file extension
//!
//! This library scans the immediate contents of a directory and relocates
//! each regular file into a subfolder named after its extension, with a
//! `no_extension` catch-all for files that have no extension or one that is
//! not allow-listed. Collisions at the destination are skipped rather than
//! overwritten, and a dry-run mode computes the same report without
//! touching the filesystem.

pub mod cli;
pub mod extension;
pub mod file_organizer;
pub mod observer;
pub mod output;

pub use extension::{ExtensionSet, NO_EXTENSION_DIR};
pub use file_organizer::{MovedFile, OrganizeError, OrganizeReport, OrganizeResult, Organizer};
pub use observer::{OrganizeObserver, SilentObserver};

pub use cli::{Cli, run_cli};
