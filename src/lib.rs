pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod extensions;
pub mod host;
pub mod logging;
pub mod ui;

pub use crate::engine::SlotEngine;
pub use crate::errors::{Error, Result};
