//! Glob matching against directory entries
//!
//! Patterns are compiled once per walk. Matching follows shell "dotfile"
//! rules: a path component starting with `.` only matches a pattern component
//! that starts with a literal `.`, so `*` skips `.git` while `.*` and `**/.*`
//! find it. `*` never crosses a `/`; `**` as a whole component does.

use glob::{MatchOptions, Pattern};

use crate::core::error::{SiftError, SiftResult};
use crate::core::model::VisitedEntry;

/// Strings an entry is matched by: base name, absolute path, and (in relative
/// display mode) the root-relative path.
pub fn candidates(entry: &VisitedEntry, include_relative: bool) -> Vec<String> {
    let mut out = Vec::with_capacity(3);
    out.push(entry.name.clone());
    out.push(entry.absolute_path());
    if include_relative {
        out.push(entry.relative_path.clone());
    }
    out
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    source: String,
    pattern: Pattern,
}

/// A compiled, ordered set of globs sharing one set of match options
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
    options: MatchOptions,
}

impl PatternSet {
    /// Compile every pattern, failing on the first invalid one
    pub fn compile<I, S>(patterns: I, case_fold: bool) -> SiftResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|source| {
                let source = source.as_ref();
                Pattern::new(source)
                    .map(|pattern| CompiledPattern {
                        source: source.to_string(),
                        pattern,
                    })
                    .map_err(|source_err| SiftError::InvalidPattern {
                        pattern: source.to_string(),
                        source: source_err,
                    })
            })
            .collect::<SiftResult<Vec<_>>>()?;

        Ok(Self {
            patterns,
            options: MatchOptions {
                case_sensitive: !case_fold,
                require_literal_separator: true,
                require_literal_leading_dot: true,
            },
        })
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if any candidate matches any pattern
    pub fn matches_any<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        self.first_match(candidates).is_some()
    }

    /// Source text of the first pattern matching any candidate
    pub fn first_match<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&str> {
        self.patterns
            .iter()
            .find(|compiled| {
                candidates
                    .iter()
                    .any(|c| compiled.pattern.matches_with(c.as_ref(), self.options))
            })
            .map(|compiled| compiled.source.as_str())
    }
}
