//! Built-in default excludes
//!
//! Version-control metadata and dependency directories. An explicit include
//! naming one of these overrides it.

pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "bower_components",
    "__pycache__",
    ".venv",
];

/// File name of the global ignore list inside the config directory
pub const IGNORE_FILE_NAME: &str = "ignore";

/// Config directory name under `$XDG_CONFIG_HOME` or `~/.config`
pub const CONFIG_DIR_NAME: &str = "pathsift";
