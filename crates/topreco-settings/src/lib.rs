//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod selection;

pub use model::{SamplesConfig, TopRecoConfigV1};
pub use resolve::{Overrides, ResolvedConfig};
pub use selection::SampleFilter;

/// Parse `topreco.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TopRecoConfigV1> {
    let cfg: TopRecoConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (defaults + config file + overrides).
pub fn resolve_config(cfg: TopRecoConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `topreco.toml`.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(TopRecoConfigV1)
}
