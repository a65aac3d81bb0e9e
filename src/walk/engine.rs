//! Depth-first traversal
//!
//! Uses walkdir, which keeps its own stack of open directories, so deep trees
//! do not grow the call stack. Directories are pruned before they are entered;
//! every entry that survives is then checked for emission. Entries arrive in
//! whatever order the OS lists them; sort downstream if order matters.

use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::SiftResult;
use crate::core::model::{FilterConfig, VisitedEntry};
use crate::walk::resolver::OverrideResolver;
use crate::walk::sink::{EmitSink, ErrorSink};

/// Counters for one completed walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub visited: usize,
    pub emitted: usize,
    pub pruned: usize,
    pub errors: usize,
}

pub struct Walker<'a> {
    root: &'a Path,
    config: &'a FilterConfig,
    resolver: OverrideResolver,
}

impl<'a> Walker<'a> {
    /// `root` must be an existing, already-resolved directory.
    pub fn new(root: &'a Path, config: &'a FilterConfig) -> SiftResult<Self> {
        Ok(Self {
            root,
            config,
            resolver: OverrideResolver::new(config)?,
        })
    }

    /// Walk the tree, sending matches to `sink` and unreadable directories to `errors`.
    ///
    /// Only a failing sink aborts the walk.
    pub fn run(
        &self,
        sink: &mut dyn EmitSink,
        errors: &mut dyn ErrorSink,
    ) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut pruned = 0usize;

        let entries = WalkDir::new(self.root)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let visited = VisitedEntry::new(self.root, entry.path(), true, false);
                if self.resolver.should_prune(&visited) {
                    tracing::debug!(path = %visited.relative_path, "pruned");
                    pruned += 1;
                    return false;
                }
                true
            });

        for result in entries {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    summary.errors += 1;
                    errors.report(describe_error(&err));
                    continue;
                }
            };

            summary.visited += 1;
            let file_type = entry.file_type();
            let visited = VisitedEntry::new(
                self.root,
                entry.path(),
                file_type.is_dir(),
                file_type.is_file(),
            );

            if self.resolver.should_emit(&visited) {
                let shown = visited.display_path(self.config.display_relative);
                tracing::trace!(path = %shown, depth = entry.depth(), "emit");
                sink.emit(&shown)?;
                summary.emitted += 1;
            }
        }

        summary.pruned = pruned;
        tracing::debug!(
            visited = summary.visited,
            emitted = summary.emitted,
            pruned = summary.pruned,
            errors = summary.errors,
            "walk finished"
        );
        Ok(summary)
    }
}

fn describe_error(err: &walkdir::Error) -> String {
    match (err.path(), err.io_error()) {
        (Some(path), Some(io_err)) if path.is_dir() => {
            format!("cannot read directory '{}': {}", path.display(), io_err)
        }
        (Some(path), Some(io_err)) => format!("cannot read '{}': {}", path.display(), io_err),
        _ => err.to_string(),
    }
}
