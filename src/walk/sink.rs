//! Output channels of a walk
//!
//! Matched paths go to an [`EmitSink`]; unreadable-directory diagnostics go to
//! a separate [`ErrorSink`] so they never mix with the path stream.

use colored::Colorize;
use std::io::{self, Write};

use crate::core::render::PathRecord;

/// Receives every matched path, in traversal order
pub trait EmitSink {
    fn emit(&mut self, path: &str) -> io::Result<()>;
}

/// Receives one human-readable message per unreadable directory
pub trait ErrorSink {
    fn report(&mut self, message: String);
}

/// Writes each path on its own line as soon as it is found
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> EmitSink for PrintSink<W> {
    fn emit(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "{}", path)?;
        self.out.flush()
    }
}

/// Writes one `{"path": ...}` JSON object per line as soon as a path is found
pub struct JsonlSink<W: Write> {
    out: W,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> EmitSink for JsonlSink<W> {
    fn emit(&mut self, path: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &PathRecord { path })?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

/// Accumulates paths for the caller to consume after the walk
#[derive(Debug, Default)]
pub struct CollectSink {
    paths: Vec<String>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

impl EmitSink for CollectSink {
    fn emit(&mut self, path: &str) -> io::Result<()> {
        self.paths.push(path.to_string());
        Ok(())
    }
}

/// Prints diagnostics to stderr as `warning: <message>`
#[derive(Debug, Default)]
pub struct StderrReporter {
    quiet: bool,
}

impl StderrReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ErrorSink for StderrReporter {
    fn report(&mut self, message: String) {
        if !self.quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }
}

impl ErrorSink for Vec<String> {
    fn report(&mut self, message: String) {
        self.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_sink_writes_lines() {
        let mut buf = Vec::new();
        {
            let mut sink = PrintSink::new(&mut buf);
            sink.emit(".").unwrap();
            sink.emit("./doc.txt").unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), ".\n./doc.txt\n");
    }

    #[test]
    fn test_jsonl_sink_writes_objects() {
        let mut buf = Vec::new();
        {
            let mut sink = JsonlSink::new(&mut buf);
            sink.emit("./a \"quoted\" name").unwrap();
        }
        let line = String::from_utf8(buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["path"], "./a \"quoted\" name");
    }

    #[test]
    fn test_collect_sink_keeps_order() {
        let mut sink = CollectSink::new();
        sink.emit("./b").unwrap();
        sink.emit("./a").unwrap();
        assert_eq!(sink.into_paths(), vec!["./b", "./a"]);
    }

    #[test]
    fn test_vec_error_sink() {
        let mut errors: Vec<String> = Vec::new();
        errors.report("cannot read directory 'x'".to_string());
        assert_eq!(errors.len(), 1);
    }
}
