use thiserror::Error;

/// Errors raised when a stored header value is interpreted.
///
/// Storing headers never fails; only the typed accessors on
/// [`HeaderStore`](crate::HeaderStore) produce these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("invalid content-length value: {0:?}")]
    InvalidContentLength(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to deserialize config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
