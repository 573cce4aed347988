use crate::core::models::SlotChoice;
use crate::core::types::{DateKey, SlotLabel};

/// Host notification for completed slot taps. Invoked exactly once per
/// successful slot selection; never for date-header taps or paging.
pub trait SelectionObserver {
    fn slot_selected(&mut self, choice: &SlotChoice);
}

/// Observer for hosts that don't consume notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn slot_selected(&mut self, _choice: &SlotChoice) {}
}

/// Currently highlighted date and, optionally, time. A time is only ever
/// held together with the date it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    date: Option<DateKey>,
    time: Option<SlotLabel>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> Option<&DateKey> {
        self.date.as_ref()
    }

    pub fn time(&self) -> Option<&SlotLabel> {
        self.time.as_ref()
    }

    /// Highlight a date column. Always drops any chosen time.
    pub fn choose_date(&mut self, date: DateKey) {
        self.date = Some(date);
        self.time = None;
    }

    /// Highlight a slot, carrying its date, in one replacement.
    pub fn choose_slot(&mut self, date: DateKey, time: SlotLabel) {
        self.date = Some(date);
        self.time = Some(time);
    }

    pub fn clear(&mut self) {
        self.date = None;
        self.time = None;
    }

    pub fn as_choice(&self) -> Option<SlotChoice> {
        match (&self.date, &self.time) {
            (Some(date), Some(time)) => Some(SlotChoice::new(date.clone(), *time)),
            _ => None,
        }
    }

    pub fn is_date_active(&self, date: &DateKey) -> bool {
        self.date.as_ref() == Some(date)
    }

    pub fn is_slot_active(&self, date: &DateKey, time: &SlotLabel) -> bool {
        self.is_date_active(date) && self.time.as_ref() == Some(time)
    }
}
