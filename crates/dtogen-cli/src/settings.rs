use crate::cli::SchemaArgs;
use anyhow::{Context, Result, bail};
use dtogen_config_build::{CONFIG_FILE_NAME, Config};
use std::path::{Path, PathBuf};

///
/// Settings
/// Config file merged with command-line overrides.
///

#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub origin: Option<PathBuf>,
}

impl Settings {
    /// Load the explicit config, else `./dtogen.toml` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let origin = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };

        let config = match &origin {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        Ok(Self { config, origin })
    }

    /// Schema files: command line first, config second.
    pub fn schemas(&self, args: &SchemaArgs) -> Result<Vec<PathBuf>> {
        if !args.schemas.is_empty() {
            return Ok(args.schemas.clone());
        }

        match &self.origin {
            Some(origin) => Ok(self
                .config
                .require_schemas(origin)
                .context("no --schema given")?
                .to_vec()),
            None => bail!("no schema files: pass --schema or provide {CONFIG_FILE_NAME}"),
        }
    }

    #[must_use]
    pub fn out_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map_or_else(|| self.config.generate.out_dir.clone(), Path::to_path_buf)
    }

    #[must_use]
    pub const fn clean(&self, flag: bool) -> bool {
        flag || self.config.generate.clean
    }

    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.config.log.level.as_deref()
    }
}
