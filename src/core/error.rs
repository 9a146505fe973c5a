//! Error types
//!
//! `ReadError` is the only recoverable kind: a single file could not be read
//! as text. `AggregateError` ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// A single file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid UTF-8 at byte {valid_up_to}: {source}")]
    Decode {
        valid_up_to: usize,
        source: std::str::Utf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ReadError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        let source = err.utf8_error();
        ReadError::Decode {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

/// Failures that abort the whole run
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("root is not a readable directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("cannot create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
