//! Lookup of the experiment-framework installation root.
//!
//! The variable is read at call time on every call; nothing is cached.

use std::collections::BTreeMap;
use std::ffi::OsString;

use topreco_types::ids;

use crate::error::{Error, Result};

/// Source of environment variables.
///
/// Resolution code takes this instead of reading `std::env` directly so tests can
/// supply a fixed environment without touching process state.
pub trait EnvSource: Send + Sync {
    /// Raw value; `None` if the variable is not set.
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEnv;

impl EnvSource for OsEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed in-memory environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Read `name` from `env`.
///
/// Only existence is checked: an empty value is returned as-is. A value that is
/// not valid UTF-8 is an error rather than a lossily converted path.
pub fn resolve_env_path<E: EnvSource + ?Sized>(env: &E, name: &str) -> Result<String> {
    match env.var_os(name) {
        Some(raw) => {
            let value = raw.into_string().map_err(|raw| Error::NonUtf8EnvVar {
                name: name.to_string(),
                lossy: raw.to_string_lossy().into_owned(),
            })?;
            tracing::debug!(var = name, value = %value, "resolved installation root");
            Ok(value)
        }
        None => {
            tracing::debug!(var = name, "installation root variable not set");
            Err(Error::MissingEnvVar {
                name: name.to_string(),
            })
        }
    }
}

/// `$CMSSW_BASE` from `env`.
pub fn cmssw_base_from<E: EnvSource + ?Sized>(env: &E) -> Result<String> {
    resolve_env_path(env, ids::ENV_CMSSW_BASE)
}

/// `$CMSSW_BASE` from the process environment.
pub fn cmssw_base() -> Result<String> {
    cmssw_base_from(&OsEnv)
}

/// Multi-line setup hint printed when the installation root is missing.
pub fn missing_env_diagnostic(name: &str) -> String {
    format!(
        "Error! Environment variable {name} not set!\n\
         Please run cmsenv first.\n\
         When running without CMSSW, you still need this variable so that\n\
         certain files can be found.\n"
    )
}
