//! Loading and saving application settings from the TOML config file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::settings::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from the config file. A missing file yields defaults;
    /// unreadable or malformed content is an error the caller can absorb.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(settings)
    }

    /// Write the full settings file, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
