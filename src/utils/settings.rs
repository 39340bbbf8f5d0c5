use super::error::{ModalError, Result};
use super::types::ModalConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of the demo app: the modal it opens first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default)]
    pub modal: ModalConfig,
}

impl DemoSettings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
            // Windows: %APPDATA%\modal-kit, macOS: ~/Library/Application Support/modal-kit
            dirs::config_dir()
                .ok_or(ModalError::NoConfigDir)?
                .join("modal-kit")
        } else {
            // Linux/Unix: $HOME/.modal-kit
            dirs::home_dir()
                .ok_or(ModalError::NoConfigDir)?
                .join(".modal-kit")
        };

        Ok(config_dir)
    }

    /// Get the full path to the settings file
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::settings_dir()?.join("demo.toml"))
    }

    /// Load settings from the config file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: DemoSettings = toml::from_str(contents)?;
        settings.modal.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Self::from_toml(&fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), "loaded demo settings");
        Ok(settings)
    }
}
