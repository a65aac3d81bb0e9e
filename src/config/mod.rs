//! Config module - Builds the FilterConfig a walk runs against
//!
//! Provides:
//! - defaults: built-in default exclude patterns
//! - ignore_file: global ignore file location and parsing
//! - exclude merging and root validation

pub mod defaults;
pub mod ignore_file;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::error::{SiftError, SiftResult};
use crate::core::model::{EntryTypeFilter, FilterConfig, WILDCARD};

/// Raw filter inputs before merging
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub global_ignore: Vec<String>,
    pub default_excludes: Vec<String>,
    pub entry_type: EntryTypeFilter,
    /// `None` for unbounded
    pub max_depth: Option<usize>,
    pub case_fold: bool,
    pub absolute: bool,
}

impl FilterOptions {
    pub fn into_filter_config(self) -> FilterConfig {
        let include_patterns = if self.include.is_empty() {
            vec![WILDCARD.to_string()]
        } else {
            dedup(self.include)
        };

        let (exclude_patterns, default_exclude_patterns) =
            merge_excludes(&self.default_excludes, &self.global_ignore, &self.exclude);

        FilterConfig {
            include_patterns,
            exclude_patterns,
            default_exclude_patterns,
            entry_type: self.entry_type,
            max_depth: self.max_depth.unwrap_or(usize::MAX),
            case_fold: self.case_fold,
            display_relative: !self.absolute,
        }
    }
}

fn dedup(patterns: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    patterns
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Union of defaults, global ignore entries and caller excludes, first occurrence kept.
///
/// Returns the merged list and the subset that came from the defaults.
pub fn merge_excludes(
    defaults: &[String],
    global_ignore: &[String],
    cli: &[String],
) -> (Vec<String>, BTreeSet<String>) {
    let merged = dedup(
        defaults
            .iter()
            .chain(global_ignore)
            .chain(cli)
            .cloned()
            .collect(),
    );
    let default_set = defaults.iter().cloned().collect();
    (merged, default_set)
}

/// Resolve the starting path and confirm it is a directory
pub fn resolve_root(path: &Path) -> SiftResult<PathBuf> {
    let resolved = path.canonicalize().map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => SiftError::RootNotFound(path.to_path_buf()),
        _ => SiftError::RootUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !resolved.is_dir() {
        return Err(SiftError::RootNotDirectory(resolved));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_EXCLUDES;
    use std::fs;
    use tempfile::tempdir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_removes_duplicates() {
        let (merged, defaults) = merge_excludes(
            &strings(&[".git", "node_modules"]),
            &strings(&["target", ".git"]),
            &strings(&["target", "*.log"]),
        );
        assert_eq!(merged, strings(&[".git", "node_modules", "target", "*.log"]));
        assert_eq!(defaults.len(), 2);
        assert!(defaults.contains(".git"));
        assert!(!defaults.contains("target"));
    }

    #[test]
    fn test_empty_include_becomes_wildcard() {
        let config = FilterOptions::default().into_filter_config();
        assert_eq!(config.include_patterns, vec!["*"]);
        assert_eq!(config.max_depth, usize::MAX);
        assert!(config.display_relative);
    }

    #[test]
    fn test_options_carry_through() {
        let options = FilterOptions {
            include: strings(&["*.rs", "*.rs", "node_modules/**"]),
            exclude: strings(&["target"]),
            default_excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            entry_type: EntryTypeFilter::FileOnly,
            max_depth: Some(2),
            case_fold: true,
            absolute: true,
            ..FilterOptions::default()
        };
        let config = options.into_filter_config();

        assert_eq!(config.include_patterns, strings(&["*.rs", "node_modules/**"]));
        assert!(config.exclude_patterns.contains(&"target".to_string()));
        assert!(config.default_exclude_patterns.contains("node_modules"));
        assert!(!config.default_exclude_patterns.contains("target"));
        assert_eq!(config.entry_type, EntryTypeFilter::FileOnly);
        assert_eq!(config.max_depth, 2);
        assert!(config.case_fold);
        assert!(!config.display_relative);
    }

    #[test]
    fn test_resolve_root() {
        let temp = tempdir().unwrap();
        let resolved = resolve_root(temp.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_root_rejects_missing_and_files() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            resolve_root(&missing),
            Err(SiftError::RootNotFound(_))
        ));

        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            resolve_root(&file),
            Err(SiftError::RootNotDirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_root_keeps_permission_errors() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can traverse the directory anyway
        if fs::metadata(locked.join("inner")).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = resolve_root(&locked.join("inner"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(SiftError::RootUnreadable { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected RootUnreadable, got {:?}", other),
        }
    }
}
