//! Path display

use std::path::Path;

/// Render a path with forward slashes, for stable report output.
pub fn display_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
