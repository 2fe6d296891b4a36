//! `beeyard.toml`: optional file-level defaults, overridden by CLI flags.
//!
//! ```toml
//! data_dir = "/home/me/.local/share/beeyard"
//! log_level = "info"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "beeyard.toml";
pub const DEFAULT_DATA_DIR: &str = ".beeyard";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the apiary JSON files.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// `tracing` filter directive used when neither `-v` nor an env filter is set.
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.display().to_string(),
            source,
        })
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, `beeyard.toml` in the
    /// working directory is used if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    message: err.to_string(),
                });
            }
        };
        Self::parse(&text, &path)
    }

    /// Data directory: CLI flag, then config file, then `.beeyard`.
    pub fn resolve_data_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        let config = Config::parse(
            "data_dir = \"/srv/bees\"\nlog_level = \"debug\"\n",
            Path::new("beeyard.toml"),
        )
        .expect("config should parse");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bees")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::parse("colour = \"amber\"\n", Path::new("beeyard.toml"))
            .expect_err("unknown key must fail");
        assert!(err.to_string().contains("failed to parse config beeyard.toml"));
    }

    #[test]
    fn flag_beats_file_beats_default() {
        let config = Config {
            data_dir: Some(PathBuf::from("from-file")),
            log_level: None,
        };
        assert_eq!(
            config.resolve_data_dir(Some(Path::new("from-flag"))),
            PathBuf::from("from-flag")
        );
        assert_eq!(config.resolve_data_dir(None), PathBuf::from("from-file"));
        assert_eq!(
            Config::default().resolve_data_dir(None),
            PathBuf::from(DEFAULT_DATA_DIR)
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/beeyard.toml")))
            .expect_err("missing explicit config must fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
