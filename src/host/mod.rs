use crate::core::models::SlotChoice;
use crate::core::types::DateKey;
use crate::engine::SlotEngine;
use crate::engine::selection::SelectionObserver;
use crate::errors::Result;
use std::cell::RefCell;
use std::rc::Rc;

pub mod repl;

/// Shadow copy of the engine's committed selection for hosts that own their
/// own `(date, time)` state. Attach a clone as the engine's observer and
/// read the mirror back after user interaction; the engine never reads it.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    inner: Rc<RefCell<Option<SlotChoice>>>,
}

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<SlotChoice> {
        self.inner.borrow().clone()
    }

    pub fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }

    /// Display echo of the mirrored choice, e.g. `02 Mar Sat – 10:30 AM`.
    pub fn echo_line(&self) -> Option<String> {
        self.get().map(|choice| echo_line(&choice))
    }
}

impl SelectionObserver for SharedSelection {
    fn slot_selected(&mut self, choice: &SlotChoice) {
        *self.inner.borrow_mut() = Some(choice.clone());
    }
}

/// Externally-owned selection for the controlled host variant. The host
/// replaces the value (e.g. when a modal reopens onto an existing
/// appointment) and pushes it into the engine, which treats it as an
/// authoritative reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlledValue {
    value: Option<SlotChoice>,
}

impl ControlledValue {
    pub fn new(value: Option<SlotChoice>) -> Self {
        Self { value }
    }

    pub fn get(&self) -> Option<&SlotChoice> {
        self.value.as_ref()
    }

    /// Replace the external value and re-synchronize the engine.
    pub fn set(&mut self, value: Option<SlotChoice>, engine: &mut SlotEngine) -> Result<()> {
        engine.sync_value(value.as_ref())?;
        self.value = value;
        Ok(())
    }

    /// Push the current value into a freshly mounted engine.
    pub fn apply(&self, engine: &mut SlotEngine) -> Result<()> {
        engine.sync_value(self.value.as_ref())
    }

    /// Pull the engine's selection back after user interaction, keeping the
    /// external copy authoritative-but-current.
    pub fn refresh_from(&mut self, engine: &SlotEngine) {
        self.value = engine.value();
    }
}

/// `"DD MMM ddd"` plus time, matching the summary line hosts render under
/// the widget.
pub fn echo_line(choice: &SlotChoice) -> String {
    format!(
        "{} – {}",
        choice.date.0.format("%d %b %a"),
        choice.time
    )
}

/// Format a raw date key for display. Cosmetic only: an unparseable key
/// falls back to the raw string instead of failing the surrounding screen.
pub fn format_date_key(raw: &str) -> String {
    match DateKey::try_from_str(raw) {
        Ok(key) => key.0.format("%d %b %a").to_string(),
        Err(_) => raw.to_string(),
    }
}
