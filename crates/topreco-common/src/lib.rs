//! Pure helpers used by TopReco analysis jobs.
//!
//! Nothing in this crate terminates the process. A missing installation root is
//! reported as [`Error::MissingEnvVar`] and the entry point decides what to do
//! with it.

#![forbid(unsafe_code)]

pub mod env;
pub mod error;
pub mod matcher;
pub mod paths;
pub mod timestamp;

#[cfg(test)]
mod proptest;

pub use env::{EnvSource, MapEnv, OsEnv, cmssw_base, cmssw_base_from, missing_env_diagnostic};
pub use error::{Error, Result, TimestampError};
pub use matcher::{MatchMode, SampleMatcher, make_string_check, make_string_check_begin};
pub use paths::{data_path, data_path_common, data_path_common_from, package_data_path};
pub use timestamp::{
    format_timestamp_with_offset, is_timestamp_shape, now_timestamp, timestamp_to_string,
};
