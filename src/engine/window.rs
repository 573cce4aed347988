use crate::core::types::{DateKey, PageDirection};
use chrono::{Duration, Local, NaiveDate};

/// Default number of visible date columns.
pub const DEFAULT_WINDOW_SIZE: u32 = 4;

/// Rolling run of consecutive dates. The anchor is the only stored state;
/// the visible dates are recomputed from it on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    anchor: NaiveDate,
    size: u32,
}

impl DateWindow {
    /// Default: `DEFAULT_WINDOW_SIZE` days starting today.
    pub fn new() -> Self {
        Self {
            anchor: Local::now().date_naive(),
            size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self
    }

    /// Show `size` days per page (clamped to at least one).
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Ordered list of visible dates: `anchor + i` for `i in [0, size)`.
    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..self.size)
            .map(|offset| self.anchor + Duration::days(offset as i64))
            .collect()
    }

    pub fn keys(&self) -> Vec<DateKey> {
        self.dates().into_iter().map(DateKey).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.anchor && date < self.anchor + Duration::days(self.size as i64)
    }

    /// Move the anchor one full window in the given direction. Unbounded in
    /// both directions: windows arbitrarily far in the past or future are
    /// reachable.
    pub fn page(&mut self, direction: PageDirection) {
        let step = Duration::days(self.size as i64);
        self.anchor = match direction {
            PageDirection::Prev => self.anchor - step,
            PageDirection::Next => self.anchor + step,
        };
    }

    /// Make `date` visible, snapping the anchor to it when it lies outside
    /// the current window. A date already on screen leaves the anchor alone.
    pub fn align_to(&mut self, date: NaiveDate) {
        if !self.contains(date) {
            self.anchor = date;
        }
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new()
    }
}
