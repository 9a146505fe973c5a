//! Path normalization utilities
//!
//! Paths are shown with '/' as separator in headers, console lines and reports.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// File name of a path as a lossy string, empty when there is none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Canonical form of a path, falling back to the path itself when it
/// cannot be resolved (e.g. it does not exist yet)
pub fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("./src/main.rs");
        assert_eq!(normalize_path(path), "./src/main.rs");
    }

    #[test]
    fn test_file_name_lossy() {
        assert_eq!(file_name_lossy(Path::new("./a/GanttView.tsx")), "GanttView.tsx");
        assert_eq!(file_name_lossy(Path::new("/")), "");
    }

    #[test]
    fn test_canonical_or_self_existing() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let canonical = canonical_or_self(&file);
        assert!(canonical.is_absolute());
        assert_eq!(canonical, file.canonicalize().unwrap());
    }

    #[test]
    fn test_canonical_or_self_missing() {
        let path = Path::new("does/not/exist.txt");
        assert_eq!(canonical_or_self(path), PathBuf::from("does/not/exist.txt"));
    }
}
