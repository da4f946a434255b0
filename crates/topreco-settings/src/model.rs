use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `topreco.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopRecoConfigV1 {
    /// Optional schema string for tooling (`topreco.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Variable holding the installation root (default `CMSSW_BASE`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_var: Option<String>,

    /// Analysis package whose `data/` directory is used (default `TopReco`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default)]
    pub samples: SamplesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SamplesConfig {
    /// `exact`, `prefix`, or `wildcard`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Samples to keep. Empty keeps everything.
    #[serde(default)]
    pub include: Vec<String>,

    /// Samples to drop, applied after `include`.
    #[serde(default)]
    pub exclude: Vec<String>,
}
