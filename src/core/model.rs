//! Filter model
//!
//! The immutable configuration a walk runs against, and the per-entry view the
//! walk hands to the resolver.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::paths::{base_name, display_relative, make_relative, normalize_path};

/// The bare wildcard include. Never counts as an explicit include.
pub const WILDCARD: &str = "*";

/// Which kinds of entries may be emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryTypeFilter {
    #[default]
    Any,
    FileOnly,
    DirectoryOnly,
}

impl EntryTypeFilter {
    /// Whether an entry of the given kind passes this filter.
    ///
    /// Entries that are neither files nor directories (symlinks, sockets, ...)
    /// only pass `Any`.
    pub fn admits(self, is_dir: bool, is_file: bool) -> bool {
        match self {
            EntryTypeFilter::Any => true,
            EntryTypeFilter::FileOnly => is_file,
            EntryTypeFilter::DirectoryOnly => is_dir,
        }
    }
}

impl std::str::FromStr for EntryTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "all" => Ok(EntryTypeFilter::Any),
            "file" | "f" => Ok(EntryTypeFilter::FileOnly),
            "dir" | "directory" | "d" => Ok(EntryTypeFilter::DirectoryOnly),
            _ => Err(format!("Unknown entry type: {}", s)),
        }
    }
}

/// Everything a single walk is filtered by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include globs; an entry must match one of these to be emitted
    pub include_patterns: Vec<String>,

    /// Every exclude glob: built-in defaults, global ignore entries and
    /// caller-supplied excludes, deduplicated
    pub exclude_patterns: Vec<String>,

    /// The subset of `exclude_patterns` that came from built-in defaults
    pub default_exclude_patterns: BTreeSet<String>,

    pub entry_type: EntryTypeFilter,

    /// 0 means the root only
    pub max_depth: usize,

    pub case_fold: bool,

    /// Emit `./`-prefixed root-relative paths instead of absolute ones
    pub display_relative: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec![WILDCARD.to_string()],
            exclude_patterns: Vec::new(),
            default_exclude_patterns: BTreeSet::new(),
            entry_type: EntryTypeFilter::Any,
            max_depth: usize::MAX,
            case_fold: false,
            display_relative: true,
        }
    }
}

/// One directory entry as seen by the resolver. Lives for a single step of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedEntry {
    pub name: String,
    pub full_path: PathBuf,
    /// Root-relative, '/'-separated; `.` for the root
    pub relative_path: String,
    pub is_dir: bool,
    pub is_file: bool,
}

impl VisitedEntry {
    pub fn new(root: &Path, full_path: &Path, is_dir: bool, is_file: bool) -> Self {
        let relative_path =
            make_relative(full_path, root).unwrap_or_else(|| normalize_path(full_path));
        Self {
            name: base_name(full_path),
            full_path: full_path.to_path_buf(),
            relative_path,
            is_dir,
            is_file,
        }
    }

    /// '/'-separated absolute path used for matching
    pub fn absolute_path(&self) -> String {
        normalize_path(&self.full_path)
    }

    /// The string handed to the emit sink
    pub fn display_path(&self, relative: bool) -> String {
        if relative {
            display_relative(&self.relative_path)
        } else {
            self.full_path.to_string_lossy().into_owned()
        }
    }
}
