use crate::core::types::{Bool, DateKey, SlotLabel};
use crate::engine::availability::DEFAULT_SLOTS;
use crate::engine::window::DEFAULT_WINDOW_SIZE;
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSizeConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for WindowSizeConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_WINDOW_SIZE,
            description: "Number of visible date columns per page.".into(),
        }
    }
}

impl ConfigItem<u32> for WindowSizeConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let parsed: u32 = new_value
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("Invalid window size: '{}'.", new_value.trim())))?;
        if parsed == 0 {
            return Err(Error::Parse(
                "Invalid window size: must be at least 1.".into(),
            ));
        }
        self.value = parsed;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotTemplateConfigItem {
    pub value: Vec<SlotLabel>,
    pub description: String,
}

impl Default for SlotTemplateConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_SLOTS.clone(),
            description: "Slot labels offered on every newly visible date.".into(),
        }
    }
}

impl ConfigItem<Vec<SlotLabel>> for SlotTemplateConfigItem {
    fn get_value(&self) -> &Vec<SlotLabel> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let labels = new_value
            .split(',')
            .map(|tok| SlotLabel::try_from_str(tok))
            .collect::<Result<Vec<_>, _>>()?;
        if labels.is_empty() {
            return Err(Error::Parse(
                "Slot template must contain at least one label.".into(),
            ));
        }
        self.value = labels;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StartDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}

impl ConfigItem<Option<NaiveDate>> for StartDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            self.value = None;
            return Ok(());
        }
        let parsed = DateKey::try_from_str(new_value)?;
        self.value = Some(parsed.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
