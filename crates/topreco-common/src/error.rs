use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The installation root variable is not present in the environment.
    #[error("environment variable {name} not set")]
    MissingEnvVar { name: String },

    /// The variable is set but its value is not valid UTF-8.
    #[error("environment variable {name} is not valid UTF-8: {lossy:?}")]
    NonUtf8EnvVar { name: String, lossy: String },

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("unix timestamp {secs} is outside the supported calendar range")]
    OutOfRange { secs: i64 },

    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),

    /// The rendered value does not have the `YYYY-MM-DD_HHhMMmSSs` shape.
    #[error("formatted timestamp {rendered:?} does not match YYYY-MM-DD_HHhMMmSSs")]
    Malformed { rendered: String },
}
