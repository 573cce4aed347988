pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, SlotTemplateConfigItem, StartDateConfigItem,
    WindowSizeConfigItem,
};
use crate::core::types::SlotLabel;
use crate::errors::{Error, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    WindowSize,
    DefaultSlots,
    StartDate,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub window_size: WindowSizeConfigItem,
    #[serde(default)]
    pub default_slots: SlotTemplateConfigItem,
    #[serde(default)]
    pub start_date: StartDateConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    pub fn load_default() -> Result<Self> {
        Self::load_from("config.json")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    /// Load the file, materializing defaults on disk when it doesn't exist
    /// yet (first run of the demo host).
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            let config = Self {
                path: path_ref.to_path_buf(),
                data: ConfigFile::default(),
            };
            config.save()?;
            return Ok(config);
        }
        Self::load_from(path_ref)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn window_size(&self) -> u32 {
        *self.data.window_size.get_value()
    }
    pub fn default_slots(&self) -> &[SlotLabel] {
        self.data.default_slots.get_value()
    }
    pub fn start_date(&self) -> Option<NaiveDate> {
        *self.data.start_date.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn rows(&self) -> Vec<(String, String, String)> {
        let mut rows = Vec::new();
        for key in ConfigKey::iter() {
            match key {
                ConfigKey::WindowSize => rows.push((
                    key.to_string(),
                    self.data.window_size.description().to_string(),
                    self.data.window_size.get_value().to_string(),
                )),
                ConfigKey::DefaultSlots => rows.push((
                    key.to_string(),
                    self.data.default_slots.description().to_string(),
                    self.data
                        .default_slots
                        .get_value()
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                )),
                ConfigKey::StartDate => rows.push((
                    key.to_string(),
                    self.data.start_date.description().to_string(),
                    self.data
                        .start_date
                        .get_value()
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                )),
                ConfigKey::FileLoggingEnabled => rows.push((
                    key.to_string(),
                    self.data.file_logging_enabled.description().to_string(),
                    self.data.file_logging_enabled.get_value().to_string(),
                )),
            }
        }
        rows
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        match key {
            ConfigKey::WindowSize => self.data.window_size.set_value(new_value)?,
            ConfigKey::DefaultSlots => self.data.default_slots.set_value(new_value)?,
            ConfigKey::StartDate => self.data.start_date.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.set_value(new_value)?,
        }
        self.save()
    }
}
