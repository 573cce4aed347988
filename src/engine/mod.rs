use crate::core::context::AppContext;
use crate::core::models::{DayColumn, SlotChoice, SlotCell};
use crate::core::types::{DateKey, PageDirection, SlotLabel};
use crate::engine::availability::{AvailabilityMap, DEFAULT_SLOTS};
use crate::engine::selection::{NoopObserver, Selection, SelectionObserver};
use crate::engine::window::DateWindow;
use crate::errors::{Error, Result};
use crate::extensions::chrono::WeekdayExt;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub mod availability;
pub mod selection;
pub mod window;
#[cfg(test)]
mod tests;

/// Availability window and slot selection engine.
///
/// Owns the rolling date window, the lazily-populated availability map, and
/// the current selection. Hosts drive it through `page`, `select_date`,
/// `select_slot`, and (for externally-owned values) `sync_value`; completed
/// selections are reported through the attached [`SelectionObserver`].
pub struct SlotEngine {
    window: DateWindow,
    availability: AvailabilityMap,
    selection: Selection,
    template: Vec<SlotLabel>,
    observer: Box<dyn SelectionObserver>,
}

impl SlotEngine {
    /// Default: a window of four days starting today, the stock slot
    /// template, and no notification consumer.
    pub fn new() -> Self {
        let mut engine = Self {
            window: DateWindow::new(),
            availability: AvailabilityMap::new(),
            selection: Selection::new(),
            template: DEFAULT_SLOTS.clone(),
            observer: Box::new(NoopObserver),
        };
        engine.ensure_window();
        engine
    }

    /// Build an engine from the host application's configuration.
    pub fn from_context(ctx: &AppContext) -> Self {
        let mut engine = Self::new();
        engine.window = engine.window.clone().with_size(ctx.config.window_size());
        if let Some(start) = ctx.config.start_date() {
            engine.window = engine.window.clone().with_anchor(start);
        }
        engine.template = ctx.config.default_slots().to_vec();
        engine.availability = AvailabilityMap::new();
        engine.ensure_window();
        engine
    }

    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.window = self.window.with_anchor(anchor);
        self.availability = AvailabilityMap::new();
        self.ensure_window();
        self
    }

    pub fn with_window_size(mut self, size: u32) -> Self {
        self.window = self.window.with_size(size);
        self.ensure_window();
        self
    }

    pub fn with_template(mut self, template: Vec<SlotLabel>) -> Self {
        self.template = template;
        self.availability = AvailabilityMap::new();
        self.ensure_window();
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn SelectionObserver>) -> Self {
        self.observer = observer;
        self
    }

    fn ensure_window(&mut self) {
        let keys = self.window.keys();
        self.availability.ensure(&keys, &self.template);
    }

    // ---- Window -------------------------------------------------------------

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn dates(&self) -> Vec<DateKey> {
        self.window.keys()
    }

    /// Move the visible window one full page. Newly visible dates get the
    /// default slot template; dates seen before keep whatever they had.
    pub fn page(&mut self, direction: PageDirection) {
        self.window.page(direction);
        self.ensure_window();
    }

    /// Year heading for the current window, spanning when it crosses a
    /// year boundary.
    pub fn year_label(&self) -> String {
        let dates = self.window.dates();
        let first = dates[0].year();
        let last = dates[dates.len() - 1].year();
        if first == last {
            first.to_string()
        } else {
            format!("{} / {}", first, last)
        }
    }

    // ---- Availability -------------------------------------------------------

    pub fn availability(&self) -> &AvailabilityMap {
        &self.availability
    }

    pub fn slots_for(&self, date: &DateKey) -> Result<&[SlotLabel]> {
        self.availability
            .get(date)
            .ok_or_else(|| Error::unknown_date(date))
    }

    /// Replace the slot list of an ensured date. Clears the chosen time if
    /// it is no longer offered.
    pub fn set_slots(&mut self, date: &DateKey, slots: Vec<SlotLabel>) -> Result<()> {
        self.availability.set_slots(date, slots)?;
        self.drop_stale_time();
        Ok(())
    }

    /// Remove one slot from an ensured date. Clears the chosen time if it
    /// was the removed slot.
    pub fn remove_slot(&mut self, date: &DateKey, time: &SlotLabel) -> Result<()> {
        self.availability.remove_slot(date, time)?;
        self.drop_stale_time();
        Ok(())
    }

    fn drop_stale_time(&mut self) {
        if let (Some(date), Some(time)) = (self.selection.date(), self.selection.time()) {
            if !self.availability.contains_slot(date, time) {
                let date = date.clone();
                self.selection.choose_date(date);
            }
        }
    }

    // ---- Selection ----------------------------------------------------------

    /// Date-header tap: highlight the date and drop any chosen time. Never
    /// notifies the host; a date alone is not a completed selection.
    pub fn select_date(&mut self, date: &DateKey) -> Result<()> {
        if !self.availability.contains_date(date) {
            return Err(Error::unknown_date(date));
        }
        self.selection.choose_date(date.clone());
        Ok(())
    }

    /// Slot tap: highlight the date and time together, then notify the host
    /// exactly once. Works without a prior `select_date`. Fails fast on a
    /// date or time outside the ensured availability, leaving the selection
    /// untouched.
    pub fn select_slot(&mut self, date: &DateKey, time: &SlotLabel) -> Result<()> {
        let slots = self
            .availability
            .get(date)
            .ok_or_else(|| Error::unknown_date(date))?;
        if !slots.contains(time) {
            return Err(Error::unknown_slot(date, time));
        }
        self.selection.choose_slot(date.clone(), *time);
        let choice = SlotChoice::new(date.clone(), *time);
        self.observer.slot_selected(&choice);
        Ok(())
    }

    /// Authoritative reset from a host that owns the value (the controlled
    /// variant). The date is ensured and made visible, the selection is
    /// replaced, and no notification fires. `None` clears the selection.
    pub fn sync_value(&mut self, value: Option<&SlotChoice>) -> Result<()> {
        let Some(choice) = value else {
            self.selection.clear();
            return Ok(());
        };

        // Validate against the date's (possibly freshly ensured) slot list
        // before touching the window or selection.
        self.availability
            .ensure(std::slice::from_ref(&choice.date), &self.template);
        if !self.availability.contains_slot(&choice.date, &choice.time) {
            return Err(Error::unknown_slot(&choice.date, &choice.time));
        }

        self.window.align_to(choice.date.0);
        self.ensure_window();
        self.selection.choose_slot(choice.date.clone(), choice.time);
        Ok(())
    }

    pub fn selected_date(&self) -> Option<&DateKey> {
        self.selection.date()
    }

    pub fn selected_time(&self) -> Option<&SlotLabel> {
        self.selection.time()
    }

    /// The committed `(date, time)` pair, if both halves are chosen.
    pub fn value(&self) -> Option<SlotChoice> {
        self.selection.as_choice()
    }

    pub fn is_date_active(&self, date: &DateKey) -> bool {
        self.selection.is_date_active(date)
    }

    pub fn is_slot_active(&self, date: &DateKey, time: &SlotLabel) -> bool {
        self.selection.is_slot_active(date, time)
    }

    // ---- Render model -------------------------------------------------------

    /// Pure derivation of the visible columns with highlight flags. Safe to
    /// call arbitrarily often; never mutates engine state.
    pub fn columns(&self) -> Vec<DayColumn> {
        self.window
            .dates()
            .into_iter()
            .map(|date| {
                let key = DateKey(date);
                let slots = self
                    .availability
                    .get(&key)
                    .map(|s| s.to_vec())
                    .unwrap_or_default();
                let cells = slots
                    .into_iter()
                    .map(|label| SlotCell {
                        active: self.is_slot_active(&key, &label),
                        label,
                    })
                    .collect();
                DayColumn {
                    day_label: date.weekday().short_label().to_string(),
                    day_number: date.day(),
                    active: self.is_date_active(&key),
                    slots: cells,
                    date: key,
                }
            })
            .collect()
    }
}

impl Default for SlotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SlotEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotEngine")
            .field("anchor", &self.window.anchor())
            .field("window_size", &self.window.size())
            .field("known_dates", &self.availability.len())
            .field("value", &self.value())
            .finish()
    }
}
