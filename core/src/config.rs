use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::repository::file::DEFAULT_REPORT_PATH;

const CONFIG_DIR_NAME: &str = ".wfh-tracker";
const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_ROSTER_SIZE: usize = 7;

/// Startup constants. Fixed for the life of the process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub roster_size: usize,
    pub business_days: Vec<String>,
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_size: DEFAULT_ROSTER_SIZE,
            business_days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// An explicit path must exist. Without one, `~/.wfh-tracker/config.json`
    /// is used when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster_size == 0 {
            return Err(ConfigError::Invalid("roster_size must be at least 1".to_string()));
        }
        if self.business_days.is_empty() {
            return Err(ConfigError::Invalid("business_days must not be empty".to_string()));
        }
        if self.business_days.iter().any(|d| d.trim().is_empty()) {
            return Err(ConfigError::Invalid("business day labels must not be blank".to_string()));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
