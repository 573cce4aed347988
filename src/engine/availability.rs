use crate::core::types::{DateKey, SlotLabel};
use crate::errors::{Error, Result};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Slot template inserted for every date the first time it becomes visible.
pub static DEFAULT_SLOTS: Lazy<Vec<SlotLabel>> = Lazy::new(|| {
    [
        (9, 30),
        (10, 30),
        (11, 30),
        (13, 30),
        (14, 30),
        (15, 30),
    ]
    .iter()
    .map(|&(h, m)| SlotLabel(NaiveTime::from_hms_opt(h, m, 0).unwrap()))
    .collect()
});

/// Lazily-populated map from date to its ordered slot labels. Entries are
/// created once per date and never replaced by paging; only the explicit
/// mutation operations change an existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityMap {
    entries: BTreeMap<DateKey, Vec<SlotLabel>>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the template for every date in `dates` that has no entry yet.
    /// Idempotent and non-destructive: existing entries keep their slot
    /// lists, including any earlier mutation.
    pub fn ensure(&mut self, dates: &[DateKey], template: &[SlotLabel]) {
        for date in dates {
            self.entries
                .entry(date.clone())
                .or_insert_with(|| template.to_vec());
        }
    }

    pub fn get(&self, date: &DateKey) -> Option<&[SlotLabel]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    pub fn contains_date(&self, date: &DateKey) -> bool {
        self.entries.contains_key(date)
    }

    pub fn contains_slot(&self, date: &DateKey, time: &SlotLabel) -> bool {
        self.entries
            .get(date)
            .map(|slots| slots.contains(time))
            .unwrap_or(false)
    }

    /// Replace the slot list of an already-ensured date. Booking-style side
    /// effects go through here; paging never does.
    pub fn set_slots(&mut self, date: &DateKey, slots: Vec<SlotLabel>) -> Result<()> {
        match self.entries.get_mut(date) {
            Some(entry) => {
                *entry = slots;
                Ok(())
            }
            None => Err(Error::unknown_date(date)),
        }
    }

    /// Remove one slot from an existing entry (e.g., taken by another
    /// booking). The slot must currently be offered on that date.
    pub fn remove_slot(&mut self, date: &DateKey, time: &SlotLabel) -> Result<()> {
        let entry = self
            .entries
            .get_mut(date)
            .ok_or_else(|| Error::unknown_date(date))?;
        let idx = entry
            .iter()
            .position(|slot| slot == time)
            .ok_or_else(|| Error::unknown_slot(date, time))?;
        entry.remove(idx);
        Ok(())
    }

    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
