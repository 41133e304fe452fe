//! Developer-mode marker check.

use std::path::Path;

/// Name of the marker file inside the log directory.
pub const MARKER_FILE_NAME: &str = ".enabled";

/// Whether anything exists at `path`.
///
/// Any error (not found, permission denied, broken symlink) reads as `false`.
pub fn path_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}
