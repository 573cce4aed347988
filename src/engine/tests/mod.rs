
use crate::core::models::SlotChoice;
use crate::core::types::{DateKey, SlotLabel};
use crate::engine::SlotEngine;
use crate::engine::selection::SelectionObserver;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;

pub(super) fn sample_date() -> NaiveDate {
    // A Friday.
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub(super) fn date(s: &str) -> DateKey {
    DateKey::try_from_str(s).unwrap()
}

pub(super) fn slot(s: &str) -> SlotLabel {
    SlotLabel::try_from_str(s).unwrap()
}

pub(super) fn make_engine() -> SlotEngine {
    SlotEngine::new().with_anchor(sample_date())
}

/// Observer capturing every notification for assertion.
#[derive(Debug, Clone, Default)]
pub(super) struct RecordingObserver {
    pub choices: Rc<RefCell<Vec<SlotChoice>>>,
}

impl RecordingObserver {
    pub fn taken(&self) -> Vec<SlotChoice> {
        self.choices.borrow().clone()
    }
}

impl SelectionObserver for RecordingObserver {
    fn slot_selected(&mut self, choice: &SlotChoice) {
        self.choices.borrow_mut().push(choice.clone());
    }
}
