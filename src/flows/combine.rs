//! Combine flow - Concatenate every eligible file under a root into one document
//!
//! Walks the tree, reads each candidate as text and appends a
//! `--- <path> ---` block to the output. Per-file failures become outcomes
//! in the report; only root, create and write failures end the run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backends::reader::{content_hash, read_text};
use crate::backends::walk::{WalkItem, Walker};
use crate::core::config::AggregateConfig;
use crate::core::error::AggregateError;
use crate::core::model::{AggregateReport, FileOutcome, SkipReason};
use crate::core::paths::{canonical_or_self, file_name_lossy, normalize_path};

/// Progress notifications emitted during a run
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A candidate is about to be read
    Processing(&'a str),
    /// An entry has its final outcome
    Finished(&'a FileOutcome),
}

/// Write one document block: header line, content, blank-line separator
pub fn write_entry<W: Write>(writer: &mut W, path: &str, content: &str) -> std::io::Result<()> {
    writeln!(writer, "--- {} ---", path)?;
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n\n")
}

/// Identifies the output document among traversed files
struct OutputGuard {
    name: String,
    canonical: PathBuf,
}

impl OutputGuard {
    fn new(output: &Path) -> Self {
        Self {
            name: file_name_lossy(output),
            canonical: canonical_or_self(output),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        file_name_lossy(path) == self.name && canonical_or_self(path) == self.canonical
    }
}

/// Run one aggregation pass.
///
/// The output file is created (or truncated) before traversal starts and
/// the returned report lists every traversed entry in traversal order.
pub fn run<F>(config: &AggregateConfig, mut on_event: F) -> Result<AggregateReport, AggregateError>
where
    F: FnMut(Event<'_>),
{
    if !config.root_dir.is_dir() {
        return Err(AggregateError::RootNotDirectory {
            path: config.root_dir.clone(),
        });
    }

    let output_path = &config.output_path;
    let file = File::create(output_path).map_err(|source| AggregateError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;
    let write_err = |source| AggregateError::WriteOutput {
        path: output_path.clone(),
        source,
    };

    let guard = OutputGuard::new(output_path);
    let mut writer = BufWriter::new(file);
    let mut report =
        AggregateReport::new(normalize_path(output_path), &config.exclude_dir_substring);

    for item in Walker::new(config) {
        let outcome = match item {
            WalkItem::Skipped(path, reason) => FileOutcome::skipped(normalize_path(&path), reason),
            WalkItem::Failed(path, reason) => FileOutcome::failed(normalize_path(&path), reason),
            WalkItem::Candidate(path) if guard.matches(&path) => {
                FileOutcome::skipped(normalize_path(&path), SkipReason::OutputFile)
            }
            WalkItem::Candidate(path) => {
                let display = normalize_path(&path);
                on_event(Event::Processing(&display));

                match read_text(&path) {
                    Ok(content) => {
                        write_entry(&mut writer, &display, &content).map_err(write_err)?;
                        FileOutcome::included(display, content.len() as u64, content_hash(&content))
                    }
                    Err(err) => FileOutcome::failed(display, err.to_string()),
                }
            }
        };

        on_event(Event::Finished(&outcome));
        report.push(outcome);
    }

    writer.flush().map_err(write_err)?;
    Ok(report)
}
