//! Strict text reading
//!
//! Files are read whole and must decode as UTF-8; anything else is a
//! `ReadError` for the caller to record.

use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

use crate::core::error::ReadError;

/// Read a file as UTF-8 text, content returned verbatim
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// xxh3-64 digest of the content as 16 hex digits
pub fn content_hash(content: &str) -> String {
    format!("{:016x}", xxh3_64(content.as_bytes()))
}
