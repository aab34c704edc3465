//! Observation hooks for organization runs.
//!
//! The organizer reports progress through the [`OrganizeObserver`] trait
//! instead of a global logging sink, so library consumers decide where the
//! notices go. Every method has a no-op default body; implementors override
//! only the events they care about.

use std::path::Path;

/// Receives notifications while a directory is being organized.
///
/// The notices are advisory and never affect the organizer's results.
/// Severity mirrors the event: non-file skips are debug-level noise, move
/// attempts are informational, collisions are warnings, and an invalid base
/// directory is an error.
pub trait OrganizeObserver {
    /// A directory entry was skipped because it is not a regular file.
    fn non_file_skipped(&self, _path: &Path) {}

    /// A file is about to be moved, or would be during a dry run.
    fn file_moving(&self, _path: &Path, _folder: &str, _dry_run: bool) {}

    /// A file was left in place because its destination already exists.
    fn collision_skipped(&self, _path: &Path, _destination: &Path) {}

    /// The base path failed directory validation.
    fn invalid_directory(&self, _path: &Path) {}
}

/// Observer that discards every notification.
///
/// This is the default used by [`Organizer::organize`](crate::Organizer::organize).
pub struct SilentObserver;

impl OrganizeObserver for SilentObserver {}
