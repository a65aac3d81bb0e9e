//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use crate::config::defaults::DEFAULT_EXCLUDES;
use crate::config::ignore_file::IgnoreSource;
use crate::config::{resolve_root, FilterOptions};
use crate::core::model::EntryTypeFilter;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::walk::engine::{WalkSummary, Walker};
use crate::walk::sink::{CollectSink, JsonlSink, PrintSink, StderrReporter};

/// pathsift - list paths under a directory, filtered by include/exclude globs.
#[derive(Parser, Debug)]
#[command(name = "pathsift")]
#[command(
    author,
    version,
    about,
    long_about = r#"pathsift walks a directory depth-first and prints every entry that matches
the include patterns and is not removed by an exclude pattern.

Patterns are globs matched against an entry's name, its absolute path and its
path relative to ROOT. `*` does not match names starting with a dot; use `.*`
to list dotfiles.

Built-in excludes (.git, node_modules, ...) hide version-control and dependency
directories. Naming one with --include brings it back; excludes from --exclude
or the global ignore file cannot be overridden.

Output order follows the filesystem's directory listing order. Use --sort for
stable output.

Examples:
    pathsift
    pathsift src --type file --include '*.rs'
    pathsift --include 'node_modules/**' --max-depth 3
    pathsift --exclude build --absolute
"#
)]
pub struct Cli {
    /// Directory to walk.
    #[arg(
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory to walk (defaults to the current directory).\n\n\
It is resolved to an absolute path before walking. Relative output is shown\n\
against this directory, with the directory itself printed as `.`."
    )]
    pub root: PathBuf,

    /// Include pattern (repeatable). Defaults to `*`.
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        long_help = "Only emit entries matching at least one include pattern.\n\n\
May be given several times. Defaults to `*`. Any pattern other than `*` also\n\
overrides the built-in excludes for the entries it matches, and `dir/**` or\n\
`dir/` keeps `dir` from being pruned."
    )]
    pub include: Vec<String>,

    /// Exclude pattern (repeatable).
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        long_help = "Skip entries matching this pattern. Matching directories are not entered.\n\n\
May be given several times. These excludes are never overridden by includes."
    )]
    pub exclude: Vec<String>,

    /// Filter results by entry type (any/file/dir).
    #[arg(
        short = 't',
        long,
        value_parser = ["any", "file", "dir"],
        default_value = "any",
        value_name = "TYPE",
        long_help = "Filter results by entry type.\n\n\
Allowed values: any, file, dir. Symlinks are only listed with `any`."
    )]
    pub r#type: String,

    /// Maximum directory depth (0 = ROOT only).
    #[arg(
        short = 'd',
        long,
        value_name = "N",
        long_help = "Maximum directory depth below ROOT. 0 lists only ROOT itself.\n\n\
If omitted, all depths are traversed."
    )]
    pub max_depth: Option<usize>,

    /// Match patterns case-insensitively.
    #[arg(long)]
    pub ignore_case: bool,

    /// Print absolute paths instead of ROOT-relative ones.
    #[arg(
        short,
        long,
        long_help = "Print resolved absolute paths instead of `./`-prefixed relative paths.\n\n\
In this mode patterns are matched against names and absolute paths only."
    )]
    pub absolute: bool,

    /// Global ignore file to load.
    #[arg(
        long,
        env = "PATHSIFT_IGNORE_FILE",
        value_name = "PATH",
        long_help = "Read extra exclude patterns from this file, one per line (# starts a comment).\n\n\
Defaults to $XDG_CONFIG_HOME/pathsift/ignore or ~/.config/pathsift/ignore when present."
    )]
    pub ignore_file: Option<PathBuf>,

    /// Do not load the global ignore file.
    #[arg(long)]
    pub no_global_ignore: bool,

    /// Disable the built-in excludes (.git, node_modules, ...).
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Output format (plain/jsonl/json).
    #[arg(
        long,
        default_value = "plain",
        value_parser = ["plain", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- plain (default): one path per line\n\
- jsonl: one {\"path\": ...} object per line\n\
- json: a single JSON array, printed after the walk completes"
    )]
    pub format: String,

    /// Sort output (buffers until the walk completes).
    #[arg(long)]
    pub sort: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode: no warnings or logs on stderr.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn filter_options(&self, global_ignore: Vec<String>) -> FilterOptions {
        let default_excludes = if self.no_default_excludes {
            Vec::new()
        } else {
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
        };

        FilterOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            global_ignore,
            default_excludes,
            entry_type: self.r#type.parse().unwrap_or(EntryTypeFilter::Any),
            max_depth: self.max_depth,
            case_fold: self.ignore_case,
            absolute: self.absolute,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = resolve_root(&cli.root)
        .with_context(|| format!("Invalid root directory: {}", cli.root.display()))?;

    let ignore_source = if cli.no_global_ignore {
        IgnoreSource::Disabled
    } else {
        IgnoreSource::locate(cli.ignore_file.as_deref())
    };
    let global_ignore = ignore_source.load()?;

    let config = cli.filter_options(global_ignore).into_filter_config();
    tracing::debug!(?config, root = %root.display(), "filter config");

    let walker = Walker::new(&root, &config).context("Invalid filter pattern")?;
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let mut reporter = StderrReporter::new(cli.quiet);

    let result = if format.is_streaming() && !cli.sort && !cli.pretty {
        let out = io::stdout().lock();
        match format {
            OutputFormat::Jsonl => walker.run(&mut JsonlSink::new(out), &mut reporter),
            _ => walker.run(&mut PrintSink::new(out), &mut reporter),
        }
    } else {
        collect_and_render(&walker, &mut reporter, render_config, cli.sort)
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                emitted = summary.emitted,
                pruned = summary.pruned,
                errors = summary.errors,
                "done"
            );
            Ok(())
        }
        // Output closed early (e.g. piped into `head`)
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("Failed to write output"),
    }
}

fn collect_and_render(
    walker: &Walker<'_>,
    reporter: &mut StderrReporter,
    render_config: RenderConfig,
    sort: bool,
) -> io::Result<WalkSummary> {
    let mut sink = CollectSink::new();
    let summary = walker.run(&mut sink, reporter)?;

    let mut paths = sink.into_paths();
    if sort {
        paths.sort();
    }

    Renderer::with_config(render_config).render_to(&paths, io::stdout().lock())?;
    Ok(summary)
}
