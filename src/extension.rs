/// Extension-based file classification.
///
/// This module decides which subfolder a file belongs in: the lowercased
/// extension for allow-listed extensions, or the `no_extension` catch-all
/// for everything else.
///
/// # Examples
///
/// ```
/// use extidy::extension::{ExtensionSet, NO_EXTENSION_DIR};
/// use std::path::Path;
///
/// let extensions = ExtensionSet::new(["txt", "png"]);
/// assert_eq!(extensions.classify(Path::new("notes.TXT")), "txt");
/// assert_eq!(extensions.classify(Path::new("README")), NO_EXTENSION_DIR);
/// ```
use std::collections::HashSet;
use std::path::Path;

/// Destination folder for files with no extension or an extension that is
/// not allow-listed.
pub const NO_EXTENSION_DIR: &str = "no_extension";

/// Set of file extensions that get their own destination folder.
///
/// Entries are normalized on construction: lowercased, with any leading dot
/// stripped. Callers may pass `"png"`, `"PNG"` or `".png"` interchangeably
/// and files classify the same way.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    allowed: HashSet<String>,
}

impl ExtensionSet {
    /// Creates an extension set from any iterable of extension strings.
    ///
    /// Empty entries (after stripping dots) are discarded, so an extension
    /// can never match a file without one.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { allowed }
    }

    /// Returns true if the lowercased extension is allow-listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use extidy::extension::ExtensionSet;
    ///
    /// let extensions = ExtensionSet::new([".JPG"]);
    /// assert!(extensions.contains("jpg"));
    /// assert!(!extensions.contains("gif"));
    /// ```
    pub fn contains(&self, extension: &str) -> bool {
        self.allowed.contains(&extension.to_lowercase())
    }

    /// Determines the destination folder name for a file path.
    ///
    /// The extension is the text after the last `.` of the file name,
    /// lowercased. Files without one (including dotfiles like `.bashrc`)
    /// and files whose extension is not in the set both map to
    /// [`NO_EXTENSION_DIR`].
    pub fn classify(&self, path: &Path) -> String {
        match file_extension(path) {
            Some(ext) if self.allowed.contains(&ext) => ext,
            _ => NO_EXTENSION_DIR.to_string(),
        }
    }
}

impl Default for ExtensionSet {
    /// The stock allow-set: common document, image, audio, video and
    /// archive extensions.
    fn default() -> Self {
        Self::new([
            "txt", "rar", "bmp", "png", "jpg", "jpeg", "gif", "mp4", "mp3", "pdf", "docx", "xlsx",
            "pptx", "zip",
        ])
    }
}

/// Extracts the lowercased extension of a file name, if it has a non-empty
/// one.
fn file_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if ext.is_empty() { None } else { Some(ext) }
}
