use crate::skin::SkinTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// staging directory for one combination, relative to the working directory
    pub scratch_dir: PathBuf,
    pub skins: SkinTable,

    /// path of the configuration file, if the configuration was loaded from a file
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scratch_dir: PathBuf::from(Config::DEFAULT_SCRATCH_DIR),
            skins: SkinTable::builtin(),
            source: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
}

impl Config {
    pub const DEFAULT_SCRATCH_DIR: &'static str = "tmp";

    pub fn parse(s: &str) -> Result<Config, ConfigLoadError> {
        toml::from_str(s).map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))
    }

    pub fn parse_file(p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let mut config: Config = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config.source = Some(p.to_owned());
        Ok(config)
    }
}
