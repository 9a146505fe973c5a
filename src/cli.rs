//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::config::{
    AggregateConfig, DEFAULT_EXCLUDE_DIR, DEFAULT_EXCLUDE_NAMES, DEFAULT_OUTPUT,
};
use crate::core::model::{FileOutcome, FileStatus};
use crate::core::render::{summary_line, OutputFormat, RenderConfig, Renderer};
use crate::flows::combine::{self, Event};

/// combiner - concatenate the text files of a directory tree into one document.
#[derive(Parser, Debug)]
#[command(name = "combiner")]
#[command(
    author,
    version,
    about,
    long_about = r#"combiner walks ROOT top-down and appends every readable UTF-8 file to a
single output document, each block introduced by a `--- <path> ---` header and
followed by a blank line.

Two exclusion rules apply before anything is read:
- directories whose path contains --exclude-dir are skipped with everything below
- files whose name contains any --exclude-name substring are skipped

Files that cannot be read or are not valid UTF-8 are reported and skipped; the
run always finishes unless ROOT or the output itself is unusable.

Examples:
    combiner
    combiner --root src --output context.txt
    combiner --exclude-dir node_modules --exclude-name .lock,.min.js
    combiner --format json --pretty
"#
)]
pub struct Cli {
    /// Root directory to traverse.
    #[arg(long, default_value = ".", value_name = "ROOT")]
    pub root: PathBuf,

    /// Output document (created or truncated).
    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE",
        long_help = "Path of the combined document. It is created fresh on every run, so\n\
running twice replaces rather than appends. If it lies under ROOT it is never\n\
read back into itself."
    )]
    pub output: PathBuf,

    /// Skip directories whose path contains this substring.
    #[arg(
        long,
        default_value = DEFAULT_EXCLUDE_DIR,
        value_name = "SUBSTR",
        long_help = "Case-sensitive substring matched against each directory path as\n\
traversed (ROOT prefix included). A matching directory contributes nothing and\n\
is not descended into. Pass an empty string to disable."
    )]
    pub exclude_dir: String,

    /// Skip files whose name contains any of these substrings.
    #[arg(
        long = "exclude-name",
        value_name = "SUBSTR",
        value_delimiter = ',',
        default_values = DEFAULT_EXCLUDE_NAMES,
        long_help = "Case-sensitive substrings matched against file names, comma-separated\n\
or given multiple times. Defaults to `Gant,gantt`, which catches both\n\
`GanttView.tsx` and `gantt.css`."
    )]
    pub exclude_names: Vec<String>,

    /// Report format (text/jsonl/json/md).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = ["text", "jsonl", "json", "md", "markdown"],
        long_help = "How to report the run on stdout.\n\n\
- text (default): one `Processing file:` line per read, one `Could not read` line\n\
  per failure, and a closing summary\n\
- jsonl: one JSON object per traversed entry, printed after the run\n\
- json: the whole report as one JSON object\n\
- md: a Markdown summary"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no per-file progress lines).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (also list skipped entries on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from parsed arguments
    pub fn aggregate_config(&self) -> AggregateConfig {
        AggregateConfig::default()
            .with_root(&self.root)
            .with_output(&self.output)
            .with_exclude_dir(&self.exclude_dir)
            .with_exclude_names(&self.exclude_names)
    }
}

/// Console policy for progress events
struct Console {
    progress: bool,
    quiet: bool,
    verbose: bool,
}

impl Console {
    fn on_event(&self, event: Event<'_>) {
        match event {
            Event::Processing(path) => {
                if self.progress && !self.quiet {
                    println!("Processing file: {}", path);
                }
            }
            Event::Finished(outcome) => self.on_outcome(outcome),
        }
    }

    fn on_outcome(&self, outcome: &FileOutcome) {
        match &outcome.status {
            FileStatus::Failed { reason } if self.progress => {
                let line = format!("Could not read {}: {}", outcome.path, reason);
                println!("{}", line.red());
            }
            FileStatus::Skipped { reason } if self.verbose => {
                let line = format!("Skipping {} ({})", outcome.path, reason);
                eprintln!("{}", line.dimmed());
            }
            _ => {}
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let config = cli.aggregate_config();

    let console = Console {
        progress: format.streams_progress(),
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let report = combine::run(&config, |event| console.on_event(event))
        .with_context(|| format!("failed to combine files under {}", config.root_dir.display()))?;

    if format.streams_progress() {
        println!("{}", summary_line(&report).green());
    } else {
        let renderer = Renderer::with_config(render_config);
        renderer
            .render_to(&report, std::io::stdout().lock())
            .context("failed to write report")?;
    }

    Ok(())
}
