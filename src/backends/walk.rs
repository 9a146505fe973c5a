//! Directory traversal backend
//!
//! Uses walkdir for a top-down walk that applies the two exclusion rules
//! before anything is read.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::AggregateConfig;
use crate::core::model::SkipReason;

/// One step of the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkItem {
    /// A file that passed both exclusion rules
    Candidate(PathBuf),
    /// An entry excluded without being read
    Skipped(PathBuf, SkipReason),
    /// An entry the traversal itself could not visit
    Failed(PathBuf, String),
}

/// Files before subdirectories, each group by name.
///
/// This reproduces a top-down listing where a directory's own files are
/// emitted before any of its children's.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Iterator over the entries of a tree, with exclusion rules applied
pub struct Walker<'a> {
    config: &'a AggregateConfig,
    inner: walkdir::IntoIter,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a AggregateConfig) -> Self {
        let inner = WalkDir::new(&config.root_dir)
            .follow_links(false)
            .sort_by(files_first)
            .into_iter();
        Self { config, inner }
    }

    pub fn root(&self) -> &Path {
        &self.config.root_dir
    }
}

impl Iterator for Walker<'_> {
    type Item = WalkItem;

    fn next(&mut self) -> Option<WalkItem> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root().to_path_buf());
                    return Some(WalkItem::Failed(path, err.to_string()));
                }
            };

            let path = entry.path();

            if entry.file_type().is_dir() {
                // Every descendant path contains the substring as well, so
                // pruning here drops the whole subtree.
                if self.config.is_excluded_dir(path) {
                    self.inner.skip_current_dir();
                    return Some(WalkItem::Skipped(path.to_path_buf(), SkipReason::ExcludedDir));
                }
                continue;
            }

            // Links to directories are listed but never descended into or read
            if entry.path_is_symlink() && path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.config.is_excluded_name(&name) {
                return Some(WalkItem::Skipped(path.to_path_buf(), SkipReason::ExcludedName));
            }

            return Some(WalkItem::Candidate(path.to_path_buf()));
        }
    }
}
