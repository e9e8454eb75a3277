use super::Result;
use crate::core::filters::City;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory containing the per-city CSV files. Defaults to the current
    /// directory when unset.
    pub data_dir: Option<PathBuf>,
    /// City preselected by `config show` consumers; informational only.
    pub default_city: Option<String>,
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|err| StorageError::ConfigParseError {
                message: err.to_string(),
            })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|err| StorageError::ConfigParseError {
                message: err.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("bikeshare").join("config.toml"))
    }

    /// Validate and apply one `config set` assignment.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            "data_dir" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "data_dir".to_string(),
                        value: value.to_string(),
                        reason: "path cannot be empty".to_string(),
                    });
                }
                self.data_dir = Some(PathBuf::from(value));
                Ok(())
            }
            "default_city" => {
                let city: City = value.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "default_city".to_string(),
                    value: value.to_string(),
                    reason: "unknown city".to_string(),
                })?;
                self.default_city = Some(city.as_str().to_string());
                Ok(())
            }
            other => Err(ConfigError::UnknownKey {
                key: other.to_string(),
            }),
        }
    }
}
