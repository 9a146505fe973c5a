//! Renderer module
//!
//! Renders an AggregateReport to different output formats: text, jsonl, json, md

use crate::core::model::{AggregateReport, FileStatus};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Whether progress lines are streamed while the run is in flight
    pub fn streams_progress(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
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
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// The closing console line of a run
pub fn summary_line(report: &AggregateReport) -> String {
    format!(
        "All files (excluding {}) have been exported to {} ({} included, {} skipped, {} failed).",
        report.excluded_dir,
        report.output,
        report.included_count(),
        report.skipped_count(),
        report.failed_count()
    )
}

/// Renderer for aggregate reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &AggregateReport) -> String {
        match self.config.format {
            OutputFormat::Text => summary_line(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &AggregateReport, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    /// One JSON object per outcome
    fn render_jsonl(&self, report: &AggregateReport) -> String {
        report
            .outcomes
            .iter()
            .filter_map(|outcome| {
                if self.config.pretty {
                    serde_json::to_string_pretty(outcome).ok()
                } else {
                    serde_json::to_string(outcome).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// The whole report as one JSON object
    fn render_json(&self, report: &AggregateReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    fn render_markdown(&self, report: &AggregateReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("# Export to `{}`\n\n", report.output));

        let failed: Vec<_> = report.failed().collect();
        if !failed.is_empty() {
            output.push_str("## Errors\n\n");
            for outcome in failed {
                if let FileStatus::Failed { reason } = &outcome.status {
                    output.push_str(&format!("- `{}`: {}\n", outcome.path, reason));
                }
            }
            output.push('\n');
        }

        let included: Vec<_> = report.included().collect();
        if !included.is_empty() {
            output.push_str("## Included\n\n");
            for outcome in included {
                if let FileStatus::Included { bytes, .. } = &outcome.status {
                    output.push_str(&format!("- `{}` ({} bytes)\n", outcome.path, bytes));
                }
            }
            output.push('\n');
        }

        let skipped: Vec<_> = report.skipped().collect();
        if !skipped.is_empty() {
            output.push_str("## Skipped\n\n");
            for outcome in skipped {
                if let FileStatus::Skipped { reason } = &outcome.status {
                    output.push_str(&format!("- `{}` ({})\n", outcome.path, reason));
                }
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "**Total:** {} included, {} skipped, {} failed, {} bytes\n",
            report.included_count(),
            report.skipped_count(),
            report.failed_count(),
            report.total_bytes()
        ));

        output
    }
}
