//! Aggregation Result Model
//!
//! Every file the traversal touches ends up as exactly one `FileOutcome`,
//! collected in traversal order into an `AggregateReport`.

use serde::{Deserialize, Serialize};

/// Why an entry was never read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Directory path contains the excluded subtree substring
    ExcludedDir,
    /// File name contains an excluded name substring
    ExcludedName,
    /// The entry is the output document itself
    OutputFile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExcludedDir => "excluded directory",
            SkipReason::ExcludedName => "excluded name",
            SkipReason::OutputFile => "output file",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    /// Content was written to the output document
    Included {
        bytes: u64,
        /// xxh3-64 digest of the content
        hash: String,
    },
    /// Excluded before any read was attempted
    Skipped { reason: SkipReason },
    /// The read was attempted and failed
    Failed { reason: String },
}

/// Outcome for a single traversed path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path as traversed, using '/' as separator
    pub path: String,

    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn included(path: impl Into<String>, bytes: u64, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Included {
                bytes,
                hash: hash.into(),
            },
        }
    }

    pub fn skipped(path: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Skipped { reason },
        }
    }

    pub fn failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self.status, FileStatus::Included { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, FileStatus::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Report of one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Output document path
    pub output: String,

    /// Substring that marked the excluded subtree for this run
    pub excluded_dir: String,

    /// One outcome per traversed entry, in traversal order
    pub outcomes: Vec<FileOutcome>,
}

impl AggregateReport {
    pub fn new(output: impl Into<String>, excluded_dir: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            excluded_dir: excluded_dir.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn included(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_included())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn included_count(&self) -> usize {
        self.included().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Total content bytes written, headers and separators excluded
    pub fn total_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Included { bytes, .. } => bytes,
                _ => 0,
            })
            .sum()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
