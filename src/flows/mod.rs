//! Flows module - Operations combining traversal, reading and writing
//!
//! Provides:
//! - combine: Concatenate a directory tree into a single text document

pub mod combine;
