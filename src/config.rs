use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

static CONFIG: OnceCell<HeadersConfig> = OnceCell::new();

/// Upper bound for [`HeadersConfig::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1024;

/// Line terminator used when a [`HeaderStore`](crate::HeaderStore) is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Number of distinct header names reserved when a store is created.
    ///
    /// At most [`MAX_INITIAL_CAPACITY`]; stores clamp larger values.
    pub initial_capacity: usize,

    pub line_ending: LineEnding,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            // a multipart part rarely carries more than a handful of headers
            initial_capacity: 4,
            line_ending: LineEnding::Crlf,
        }
    }
}

impl HeadersConfig {
    /// Reads the config from a TOML file, falling back to the default config
    /// when the file can't be read, deserialized or validated.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "fall back to default headers config"
                );
                HeadersConfig::default()
            }
        }
    }

    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<HeadersConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Validation(format!(
                "initial_capacity {} exceeds {MAX_INITIAL_CAPACITY}",
                self.initial_capacity
            )));
        }
        Ok(())
    }
}

/// Installs the process-wide default config.
///
/// Must run before the first call to [`config`], which installs the default
/// config when none is set. Returns the rejected config if one was already
/// installed. [`HeaderStore::new`](crate::HeaderStore::new) does not install
/// anything.
pub fn set_config(cfg: HeadersConfig) -> Result<(), HeadersConfig> {
    cfg.validate().map_err(|_| cfg.clone())?;
    CONFIG.set(cfg)
}

/// Process-wide default config, [`HeadersConfig::default`] unless [`set_config`] ran first.
pub fn config() -> &'static HeadersConfig {
    CONFIG.get_or_init(HeadersConfig::default)
}

/// Runs `f` with the installed config, or with the default one without
/// installing it.
pub(crate) fn with_current<R>(f: impl FnOnce(&HeadersConfig) -> R) -> R {
    with_installed(&CONFIG, f)
}

fn with_installed<R>(cell: &OnceCell<HeadersConfig>, f: impl FnOnce(&HeadersConfig) -> R) -> R {
    match cell.get() {
        Some(cfg) => f(cfg),
        None => f(&HeadersConfig::default()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::headers::HeaderStore;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fileupload-headers-{name}-{}.toml", std::process::id()))
    }

    #[test]
    fn from_toml_full() {
        let cfg = HeadersConfig::from_toml("initial_capacity = 16\nline_ending = \"lf\"\n")
            .unwrap();
        assert_eq!(cfg.initial_capacity, 16);
        assert_eq!(cfg.line_ending, LineEnding::Lf);
    }

    #[test]
    fn from_toml_partial_uses_defaults() {
        let cfg = HeadersConfig::from_toml("initial_capacity = 1").unwrap();
        assert_eq!(cfg.initial_capacity, 1);
        assert_eq!(cfg.line_ending, LineEnding::Crlf);

        assert_eq!(HeadersConfig::from_toml("").unwrap(), HeadersConfig::default());
    }

    #[test]
    fn from_toml_rejects_bad_values() {
        let err = HeadersConfig::from_toml("line_ending = \"cr\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn oversized_capacity() {
        let err = HeadersConfig::from_toml("initial_capacity = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let at_limit = format!("initial_capacity = {MAX_INITIAL_CAPACITY}");
        assert_eq!(
            HeadersConfig::from_toml(&at_limit).unwrap().initial_capacity,
            MAX_INITIAL_CAPACITY
        );

        let path = temp_path("oversized");
        std::fs::write(&path, "initial_capacity = 9223372036854775807").unwrap();
        assert_eq!(HeadersConfig::from_file(&path), HeadersConfig::default());
        std::fs::remove_file(&path).unwrap();

        // built by hand, bypassing validation
        let cfg = HeadersConfig {
            initial_capacity: usize::MAX,
            line_ending: LineEnding::Crlf,
        };
        let store = HeaderStore::with_config(&cfg);
        store.add_header("A", "1");
        assert_eq!(store.len(), 1);

        assert_eq!(set_config(cfg.clone()), Err(cfg));
    }

    #[test]
    fn from_file_falls_back() {
        let missing = temp_path("missing");
        assert!(matches!(HeadersConfig::try_from_file(&missing), Err(ConfigError::Io(_))));
        assert_eq!(HeadersConfig::from_file(&missing), HeadersConfig::default());

        let broken = temp_path("broken");
        std::fs::write(&broken, "initial_capacity = \"many\"").unwrap();
        assert_eq!(HeadersConfig::from_file(&broken), HeadersConfig::default());
        std::fs::write(&broken, "line_ending = \"lf\"").unwrap();
        assert_eq!(HeadersConfig::from_file(&broken).line_ending, LineEnding::Lf);
        std::fs::remove_file(&broken).unwrap();
    }

    #[test]
    fn store_creation_does_not_install_config() {
        let cell = OnceCell::new();
        let store = with_installed(&cell, HeaderStore::with_config);
        assert!(store.is_empty());
        assert!(cell.get().is_none());

        let custom = HeadersConfig {
            initial_capacity: 8,
            line_ending: LineEnding::Lf,
        };
        assert!(cell.set(custom.clone()).is_ok());
        assert_eq!(with_installed(&cell, |cfg| cfg.clone()), custom);
    }

    #[test]
    fn global_config() {
        // nothing else in the test binary installs a config
        assert_eq!(config(), &HeadersConfig::default());
        assert!(set_config(HeadersConfig::default()).is_err());
    }
}
