//! Aggregation configuration
//!
//! Holds the traversal root, the destination file and the two exclusion rules.

use std::path::{Path, PathBuf};

/// Default output file name, written relative to the working directory
pub const DEFAULT_OUTPUT: &str = "combined_replit_files.txt";

/// Default substring that marks an excluded subtree
pub const DEFAULT_EXCLUDE_DIR: &str = "gantt";

/// Default file name substrings that mark an excluded file
pub const DEFAULT_EXCLUDE_NAMES: [&str; 2] = ["Gant", "gantt"];

/// Configuration for a single aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    /// Traversal start
    pub root_dir: PathBuf,

    /// Destination file (created or truncated)
    pub output_path: PathBuf,

    /// Directories whose path contains this substring contribute nothing
    pub exclude_dir_substring: String,

    /// Files whose name contains any of these substrings are skipped
    pub exclude_name_substrings: Vec<String>,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            exclude_dir_substring: DEFAULT_EXCLUDE_DIR.to_string(),
            exclude_name_substrings: DEFAULT_EXCLUDE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AggregateConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = root.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output_path = output.into();
        self
    }

    pub fn with_exclude_dir(mut self, substring: impl Into<String>) -> Self {
        self.exclude_dir_substring = substring.into();
        self
    }

    pub fn with_exclude_names<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_name_substrings = substrings.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a directory path falls inside the excluded subtree.
    ///
    /// This is a plain case-sensitive substring test on the whole path as
    /// traversed, root prefix included, so `./my_gantt_notes` matches too.
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        if self.exclude_dir_substring.is_empty() {
            return false;
        }
        dir.to_string_lossy()
            .contains(self.exclude_dir_substring.as_str())
    }

    /// Check whether a file name matches any excluded name substring
    pub fn is_excluded_name(&self, file_name: &str) -> bool {
        self.exclude_name_substrings
            .iter()
            .filter(|s| !s.is_empty())
            .any(|s| file_name.contains(s.as_str()))
    }
}
