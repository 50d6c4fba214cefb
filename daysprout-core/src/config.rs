//! Global daysprout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DaySproutError, DaySproutResult};

static DEFAULT_DATA_PATH: &str = "~/.daysprout";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/daysprout/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct DaySproutConfig {
    /// Where the event and category collections live.
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,
}

impl Default for DaySproutConfig {
    fn default() -> Self {
        DaySproutConfig {
            data_dir: default_data_path(),
        }
    }
}

impl DaySproutConfig {
    pub fn config_path() -> DaySproutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaySproutError::Config("Could not determine config directory".into()))?
            .join("daysprout");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> DaySproutResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: DaySproutConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| DaySproutError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaySproutError::Config(e.to_string()))?;

        Ok(config)
    }

    /// `data_dir` with `~` expanded to the home directory.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn save(&self) -> DaySproutResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DaySproutError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DaySproutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaySproutResult<()> {
        let contents = format!(
            "\
# daysprout configuration

# Where your countdown data lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaySproutError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaySproutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
