//! Stable identifiers for environment variables and path conventions.

// Environment
pub const ENV_CMSSW_BASE: &str = "CMSSW_BASE";
pub const ENV_TOPRECO_LOG: &str = "TOPRECO_LOG";

// Layout below $CMSSW_BASE
pub const ANALYSIS_SRC: &str = "src/Analysis";
pub const PACKAGE_TOPRECO: &str = "TopReco";
pub const DATA_SUBDIR_TOPRECO: &str = "src/Analysis/TopReco/data";

// Timestamps: `%Y-%m-%d_%Hh%Mm%Ss`
pub const TIMESTAMP_PATTERN: &str = "YYYY-MM-DD_HHhMMmSSs";
pub const TIMESTAMP_LEN: usize = TIMESTAMP_PATTERN.len();
