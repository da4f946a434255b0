use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolved data directory below an installation root.
///
/// Built by plain string composition:
/// - segments are joined with a single `/`
/// - trailing slashes on the base are not collapsed (the base is taken verbatim)
/// - the directory is never checked for existence
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DataPath(String);

impl DataPath {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_utf8_path(&self) -> &Utf8Path {
        Utf8Path::new(&self.0)
    }

    /// Append `segment` with a `/` separator.
    pub fn join(&self, segment: &str) -> DataPath {
        let mut v = String::with_capacity(self.0.len() + 1 + segment.len());
        v.push_str(&self.0);
        v.push('/');
        v.push_str(segment);
        DataPath(v)
    }
}

impl std::fmt::Display for DataPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
