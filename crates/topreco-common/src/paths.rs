//! Data directory conventions below the installation root.
//!
//! No filesystem access happens here; callers check existence themselves.

use topreco_types::{DataPath, ids};

use crate::env::{EnvSource, OsEnv, resolve_env_path};
use crate::error::Result;

/// `<base>/src/Analysis/<package>/data`
pub fn package_data_path(base: &str, package: &str) -> DataPath {
    DataPath::new(base).join(&format!("{}/{package}/data", ids::ANALYSIS_SRC))
}

/// Data directory of `package`, rooted at the variable `env_var`.
pub fn data_path<E: EnvSource + ?Sized>(env: &E, env_var: &str, package: &str) -> Result<DataPath> {
    let base = resolve_env_path(env, env_var)?;
    Ok(package_data_path(&base, package))
}

/// `$CMSSW_BASE/src/Analysis/TopReco/data`, reading `env`.
pub fn data_path_common_from<E: EnvSource + ?Sized>(env: &E) -> Result<DataPath> {
    let base = resolve_env_path(env, ids::ENV_CMSSW_BASE)?;
    Ok(DataPath::new(base).join(ids::DATA_SUBDIR_TOPRECO))
}

/// `$CMSSW_BASE/src/Analysis/TopReco/data`, reading the process environment.
pub fn data_path_common() -> Result<DataPath> {
    data_path_common_from(&OsEnv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use crate::error::Error;

    #[test]
    fn common_data_path_appends_fixed_suffix() {
        let env = MapEnv::new().with("CMSSW_BASE", "/opt/cmssw");
        let path = data_path_common_from(&env).unwrap();
        assert_eq!(path.as_str(), "/opt/cmssw/src/Analysis/TopReco/data");
    }

    #[test]
    fn common_data_path_inherits_missing_variable() {
        let env = MapEnv::new();
        assert!(matches!(
            data_path_common_from(&env),
            Err(Error::MissingEnvVar { .. })
        ));
    }

    #[test]
    fn generic_form_agrees_with_common_form() {
        let env = MapEnv::new().with("CMSSW_BASE", "/opt/cmssw");
        assert_eq!(
            data_path(&env, "CMSSW_BASE", "TopReco").unwrap(),
            data_path_common_from(&env).unwrap()
        );
    }

    #[test]
    fn sibling_package_uses_same_layout() {
        let path = package_data_path("/opt/cmssw", "Tools");
        assert_eq!(path.as_str(), "/opt/cmssw/src/Analysis/Tools/data");
    }

    #[test]
    fn nonexistent_base_is_not_checked() {
        let env = MapEnv::new().with("CMSSW_BASE", "/definitely/not/here");
        let path = data_path_common_from(&env).unwrap();
        assert!(!path.as_utf8_path().exists());
    }
}
