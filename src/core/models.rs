use crate::core::types::{DateKey, SlotLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed slot selection, as handed to hosts by the notification
/// callback and as pushed back by the controlled host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotChoice {
    pub date: DateKey,
    pub time: SlotLabel,
}

impl SlotChoice {
    pub fn new(date: DateKey, time: SlotLabel) -> Self {
        Self { date, time }
    }
}

impl fmt::Display for SlotChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

// ============
// Render model
// ============

/// One slot button inside a date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    pub label: SlotLabel,
    pub active: bool,
}

/// One visible date column: weekday label, day-of-month number, and its
/// slot buttons, with highlight flags derived from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: DateKey,
    pub day_label: String,
    pub day_number: u32,
    pub active: bool,
    pub slots: Vec<SlotCell>,
}
