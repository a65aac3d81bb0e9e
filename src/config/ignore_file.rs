//! Global ignore file
//!
//! Plain text, one glob per line. Blank lines and `#` comments are skipped.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::defaults::{CONFIG_DIR_NAME, IGNORE_FILE_NAME};
use crate::core::error::{SiftError, SiftResult};

/// Extract patterns from ignore file content
pub fn parse_ignore_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `$XDG_CONFIG_HOME/pathsift/ignore`, falling back to `$HOME/.config/pathsift/ignore`
pub fn default_ignore_path(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_dir.join(CONFIG_DIR_NAME).join(IGNORE_FILE_NAME))
}

/// Where the global ignore file is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreSource {
    /// Named by the user; must exist
    Explicit(PathBuf),
    /// Well-known location; silently empty when absent
    Default(PathBuf),
    Disabled,
}

impl IgnoreSource {
    /// Explicit path if given, otherwise the well-known location from the environment
    pub fn locate(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => IgnoreSource::Explicit(path.to_path_buf()),
            None => default_ignore_path(
                std::env::var_os("XDG_CONFIG_HOME"),
                std::env::var_os("HOME"),
            )
            .map(IgnoreSource::Default)
            .unwrap_or(IgnoreSource::Disabled),
        }
    }

    pub fn load(&self) -> SiftResult<Vec<String>> {
        let (path, required) = match self {
            IgnoreSource::Explicit(path) => (path, true),
            IgnoreSource::Default(path) => (path, false),
            IgnoreSource::Disabled => return Ok(Vec::new()),
        };

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let patterns = parse_ignore_list(&content);
                tracing::info!(
                    path = %path.display(),
                    count = patterns.len(),
                    "loaded global ignore file"
                );
                Ok(patterns)
            }
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(SiftError::IgnoreFile {
                path: path.clone(),
                source,
            }),
        }
    }
}
