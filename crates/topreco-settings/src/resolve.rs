use anyhow::Context;
use topreco_common::MatchMode;
use topreco_types::ids;

use crate::model::TopRecoConfigV1;
use crate::selection::SampleFilter;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub env_var: Option<String>,
    pub package: Option<String>,
    pub mode: Option<String>,
    /// Replaces the configured include list when non-empty.
    pub include: Vec<String>,
    /// Replaces the configured exclude list when non-empty.
    pub exclude: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub env_var: String,
    pub package: String,
    pub mode: MatchMode,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            env_var: ids::ENV_CMSSW_BASE.to_string(),
            package: ids::PACKAGE_TOPRECO.to_string(),
            mode: MatchMode::default(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    pub fn sample_filter(&self) -> SampleFilter {
        SampleFilter::new(self.mode, self.include.clone(), self.exclude.clone())
    }
}

pub fn resolve_config(cfg: TopRecoConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(env_var) = overrides.env_var.or(cfg.env_var) {
        if env_var.trim().is_empty() {
            anyhow::bail!("env_var must not be empty");
        }
        resolved.env_var = env_var;
    }

    if let Some(package) = overrides.package.or(cfg.package) {
        if package.trim().is_empty() || package.contains('/') {
            anyhow::bail!("invalid package name: {package:?}");
        }
        resolved.package = package;
    }

    if let Some(mode) = overrides.mode.as_deref().or(cfg.samples.mode.as_deref()) {
        resolved.mode = parse_mode(mode).context("invalid samples.mode")?;
    }

    resolved.include = if overrides.include.is_empty() {
        cfg.samples.include
    } else {
        overrides.include
    };
    resolved.exclude = if overrides.exclude.is_empty() {
        cfg.samples.exclude
    } else {
        overrides.exclude
    };

    Ok(resolved)
}

fn parse_mode(v: &str) -> anyhow::Result<MatchMode> {
    match MatchMode::from_name(v) {
        Some(mode) => Ok(mode),
        None => anyhow::bail!(
            "unknown match mode: {v} (expected {})",
            MatchMode::NAMES.join("|")
        ),
    }
}
