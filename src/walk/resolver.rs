//! Include/exclude precedence
//!
//! Two decisions are made per entry: whether a directory is pruned (neither
//! emitted nor entered) and whether an entry is emitted.
//!
//! Excludes that came from the built-in defaults can be overridden by an
//! explicit include, i.e. any include other than the bare `*`. Every other
//! exclude always suppresses emission. Pruning is skipped whenever an explicit
//! include targets the directory or its contents (`dir/**` and `dir/` also
//! count as targeting `dir`).

use crate::core::error::SiftResult;
use crate::core::model::{EntryTypeFilter, FilterConfig, VisitedEntry, WILDCARD};
use crate::walk::matcher::{candidates, PatternSet};

/// `dir/**` -> `dir`, `dir/` -> `dir`; `None` for anything else
fn directory_form(pattern: &str) -> Option<&str> {
    let stripped = pattern
        .strip_suffix("/**")
        .or_else(|| pattern.strip_suffix('/'))?;
    (!stripped.is_empty()).then_some(stripped)
}

#[derive(Debug, Clone)]
pub struct OverrideResolver {
    includes: PatternSet,
    /// Includes other than `*`, as written
    explicit: PatternSet,
    /// `explicit` plus the directory forms of `dir/**` and `dir/` includes
    explicit_with_dirs: PatternSet,
    default_excludes: PatternSet,
    /// Excludes with no override path
    strict_excludes: PatternSet,
    entry_type: EntryTypeFilter,
    match_relative: bool,
}

impl OverrideResolver {
    /// Compile every pattern in the config once
    pub fn new(config: &FilterConfig) -> SiftResult<Self> {
        let case_fold = config.case_fold;

        let explicit: Vec<&str> = config
            .include_patterns
            .iter()
            .map(String::as_str)
            .filter(|p| *p != WILDCARD)
            .collect();

        let mut with_dirs = explicit.clone();
        for pattern in explicit.iter().copied() {
            if let Some(dir) = directory_form(pattern) {
                if !with_dirs.contains(&dir) {
                    with_dirs.push(dir);
                }
            }
        }

        let (defaults, strict): (Vec<&String>, Vec<&String>) = config
            .exclude_patterns
            .iter()
            .partition(|p| config.default_exclude_patterns.contains(p.as_str()));

        Ok(Self {
            includes: PatternSet::compile(&config.include_patterns, case_fold)?,
            explicit: PatternSet::compile(&explicit, case_fold)?,
            explicit_with_dirs: PatternSet::compile(&with_dirs, case_fold)?,
            default_excludes: PatternSet::compile(defaults, case_fold)?,
            strict_excludes: PatternSet::compile(strict, case_fold)?,
            entry_type: config.entry_type,
            match_relative: config.display_relative,
        })
    }

    fn candidates(&self, entry: &VisitedEntry) -> Vec<String> {
        candidates(entry, self.match_relative)
    }

    fn matches_exclude(&self, candidates: &[String]) -> bool {
        self.strict_excludes.matches_any(candidates)
            || self.default_excludes.matches_any(candidates)
    }

    /// Whether a directory is skipped together with everything beneath it
    pub fn should_prune(&self, entry: &VisitedEntry) -> bool {
        let candidates = self.candidates(entry);
        if !self.matches_exclude(&candidates) {
            return false;
        }
        if let Some(include) = self.explicit_with_dirs.first_match(&candidates) {
            tracing::debug!(path = %entry.relative_path, include, "exclude overridden, descending");
            return false;
        }
        true
    }

    /// Whether an entry is handed to the emit sink
    pub fn should_emit(&self, entry: &VisitedEntry) -> bool {
        if !self.entry_type.admits(entry.is_dir, entry.is_file) {
            return false;
        }

        let candidates = self.candidates(entry);
        if !self.includes.matches_any(&candidates) {
            return false;
        }

        if let Some(exclude) = self.strict_excludes.first_match(&candidates) {
            tracing::trace!(path = %entry.relative_path, exclude, "excluded");
            return false;
        }

        if let Some(exclude) = self.default_excludes.first_match(&candidates) {
            let rescued = self.explicit.matches_any(&candidates);
            tracing::trace!(path = %entry.relative_path, exclude, rescued, "default exclude");
            return rescued;
        }

        true
    }
}
