//! Backends module - File system operations
//!
//! Provides:
//! - walk: Tree traversal with exclusion rules (walkdir)
//! - reader: Strict UTF-8 file reading

pub mod reader;
pub mod walk;
