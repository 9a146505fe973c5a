//! combiner - Concatenate a directory tree into one text document
//!
//! combiner provides:
//! - Top-down traversal with directory and file-name exclusion rules
//! - Strict UTF-8 reading with per-file failure reporting
//! - A single `--- <path> ---` delimited output document
//! - Run reports in text/jsonl/json/md

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
