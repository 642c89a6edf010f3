//! `dtogen.toml` loading.
//!
//! Relative paths in the file are resolved against the directory holding it.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File name looked up when no config path is given.
pub const CONFIG_FILE_NAME: &str = "dtogen.toml";

/// Output directory used when the config names none.
pub const DEFAULT_OUT_DIR: &str = "generated";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config {0:?} lists no schema files")]
    NoSchemas(PathBuf),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub log: LogConfig,
}

///
/// GenerateConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    #[serde(default)]
    pub schemas: Vec<PathBuf>,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Remove `out_dir` before writing.
    #[serde(default)]
    pub clean: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            schemas: Vec::new(),
            out_dir: default_out_dir(),
            clean: false,
        }
    }
}

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info`.
    #[serde(default)]
    pub level: Option<String>,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

impl Config {
    /// Parse config text; paths are left as written.
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Load a config file and anchor its relative paths at the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.into(),
            source,
        })?;
        let config = Self::from_toml(&src).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));

        Ok(config.rebased(base))
    }

    #[must_use]
    pub fn rebased(mut self, base: &Path) -> Self {
        self.generate.schemas = self
            .generate
            .schemas
            .iter()
            .map(|p| base.join(p))
            .collect();
        self.generate.out_dir = base.join(&self.generate.out_dir);

        self
    }

    /// Schema list, refusing an empty one.
    pub fn require_schemas(&self, origin: &Path) -> Result<&[PathBuf], ConfigError> {
        if self.generate.schemas.is_empty() {
            Err(ConfigError::NoSchemas(origin.into()))
        } else {
            Ok(&self.generate.schemas)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_file() {
        let config = Config::from_toml("").unwrap();

        assert!(config.generate.schemas.is_empty());
        assert_eq!(config.generate.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert!(!config.generate.clean);
        assert!(config.log.level.is_none());
    }

    #[test]
    fn parses_full_file() {
        let config = Config::from_toml(
            r#"
            [generate]
            schemas = ["schema/shop.toml", "schema/hr.json"]
            out_dir = "target/dto"
            clean = true

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.generate.schemas.len(), 2);
        assert_eq!(config.generate.out_dir, PathBuf::from("target/dto"));
        assert!(config.generate.clean);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("[generate]\nout = \"x\"").is_err());
    }

    #[test]
    fn load_rebases_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[generate]\nschemas = [\"shop.toml\"]\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.generate.schemas, vec![dir.path().join("shop.toml")]);
        assert_eq!(config.generate.out_dir, dir.path().join(DEFAULT_OUT_DIR));
        assert!(config.require_schemas(&path).is_ok());
    }

    #[test]
    fn empty_schema_list_is_refused() {
        let config = Config::default();
        let err = config.require_schemas(Path::new("dtogen.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::NoSchemas(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/no/such/dtogen.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
