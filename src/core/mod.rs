//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run configuration and exclusion rules (AggregateConfig)
//! - Per-file result model (FileOutcome, AggregateReport)
//! - Error types
//! - Rendering functions for different report formats
//! - Path normalization utilities

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
