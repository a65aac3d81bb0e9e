//! Renderer module
//!
//! Renders collected paths to the output formats: plain, jsonl, json.
//! Streaming output goes through the print sinks instead.

use serde::Serialize;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Jsonl,
    Json,
}

impl OutputFormat {
    /// Whether paths can be written as they are found
    pub fn is_streaming(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// One emitted path as a JSON object
#[derive(Serialize)]
pub struct PathRecord<'a> {
    pub path: &'a str,
}

/// Renderer for collected path lists
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render paths to a string, one entry per line (or one array for json)
    pub fn render(&self, paths: &[String]) -> String {
        match self.config.format {
            OutputFormat::Plain => paths.join("\n"),
            OutputFormat::Jsonl => self.render_jsonl(paths),
            OutputFormat::Json => self.render_json(paths),
        }
    }

    /// Render to a writer, newline-terminated when non-empty
    pub fn render_to<W: Write>(&self, paths: &[String], mut writer: W) -> std::io::Result<()> {
        let output = self.render(paths);
        if !output.is_empty() {
            writeln!(writer, "{}", output)?;
        }
        writer.flush()
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, paths: &[String]) -> String {
        paths
            .iter()
            .filter_map(|path| {
                let record = PathRecord { path };
                if self.config.pretty {
                    serde_json::to_string_pretty(&record).ok()
                } else {
                    serde_json::to_string(&record).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array of strings
    fn render_json(&self, paths: &[String]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(paths).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(paths).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<String> {
        vec![".".to_string(), "./doc.txt".to_string()]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("plain".parse(), Ok(OutputFormat::Plain));
        assert_eq!("JSONL".parse(), Ok(OutputFormat::Jsonl));
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert!("md".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_streaming_formats() {
        assert!(OutputFormat::Plain.is_streaming());
        assert!(OutputFormat::Jsonl.is_streaming());
        assert!(!OutputFormat::Json.is_streaming());
    }

    #[test]
    fn test_render_plain() {
        let renderer = Renderer::with_config(RenderConfig::default());
        assert_eq!(renderer.render(&paths()), ".\n./doc.txt");
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Jsonl, false));
        assert_eq!(
            renderer.render(&paths()),
            "{\"path\":\".\"}\n{\"path\":\"./doc.txt\"}"
        );
    }

    #[test]
    fn test_render_jsonl_pretty_separates_records() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Jsonl, true));
        let output = renderer.render(&paths());
        let records: Vec<&str> = output.split("\n\n").collect();
        assert_eq!(records.len(), 2);
        for record in records {
            let value: serde_json::Value = serde_json::from_str(record).unwrap();
            assert!(value["path"].is_string());
        }
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, false));
        assert_eq!(renderer.render(&paths()), "[\".\",\"./doc.txt\"]");
        assert_eq!(renderer.render(&[]), "[]");
    }

    #[test]
    fn test_render_to_skips_empty_plain_output() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let mut buf = Vec::new();
        renderer.render_to(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
