//! pathsift - Recursive path listing with include/exclude globs
//!
//! pathsift provides:
//! - Depth-first directory walking with depth limits
//! - Include/exclude glob filtering with dotfile-aware matching
//! - Built-in default excludes that explicit includes can override
//! - Plain, jsonl and json output

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod core;
mod walk;

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    cli::run(cli)
}
