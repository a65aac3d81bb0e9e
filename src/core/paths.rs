//! Path normalization utilities
//!
//! Matching always happens on '/'-separated strings, regardless of platform.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory.
///
/// The root itself becomes `.`.
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        Some(".".to_string())
    } else {
        Some(normalize_path(relative))
    }
}

/// Display form of a root-relative path: `.` for the root, `./<rel>` otherwise
pub fn display_relative(relative: &str) -> String {
    if relative == "." {
        relative.to_string()
    } else {
        format!("./{}", relative)
    }
}

/// Last component of a path, or the whole path when it has none (e.g. `/`)
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}
