use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::types::{DateKey, SlotLabel};

/// Domain-specific error set for the slot selection engine.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Malformed date keys, slot labels, or host commands.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Selection invariants ----------------------------------------------
    /// A date key that has never been ensured into the availability map.
    #[error("Unknown date: '{date}' has no availability entry.")]
    UnknownDate { date: DateKey },

    /// A time label absent from the slot list of its date.
    #[error("Unknown slot: '{time}' is not offered on '{date}'.")]
    UnknownSlot { date: DateKey, time: SlotLabel },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Specific missing config item.
    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (config file, log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for a date key missing from the availability map.
    pub fn unknown_date(date: &DateKey) -> Self {
        Error::UnknownDate { date: date.clone() }
    }
    /// Helper for a time label missing from its date's slot list.
    pub fn unknown_slot(date: &DateKey, time: &SlotLabel) -> Self {
        Error::UnknownSlot {
            date: date.clone(),
            time: time.clone(),
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or_else(|| Error::ConfigItemMissing { item })
}
