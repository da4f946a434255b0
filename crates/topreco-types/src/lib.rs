//! Stable names and small value types shared across the TopReco workspace.
//!
//! This crate is intentionally boring:
//! - environment variable names and fixed data subdirectories
//! - the canonical data directory path type

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;

pub use path::DataPath;
