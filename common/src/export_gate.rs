//! Debounce for the export buttons.
//!
//! A second click on the same card within [`EXPORT_COOLDOWN_MS`] is dropped,
//! and so is any click while an export is still in flight.

use std::collections::HashMap;

pub const EXPORT_COOLDOWN_MS: f64 = 800.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportGate {
    last_accepted: HashMap<String, f64>,
    in_flight: Option<String>,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate for `id` at `now_ms` (a monotonic clock in
    /// milliseconds). Returns `false` when the trigger must be ignored.
    pub fn try_begin(&mut self, id: &str, now_ms: f64) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        if let Some(last) = self.last_accepted.get(id) {
            if now_ms - last < EXPORT_COOLDOWN_MS {
                return false;
            }
        }
        self.last_accepted.insert(id.to_string(), now_ms);
        self.in_flight = Some(id.to_string());
        true
    }

    /// Releases the gate once the export for `id` has finished either way.
    pub fn finish(&mut self, id: &str) {
        if self.in_flight.as_deref() == Some(id) {
            self.in_flight = None;
        }
    }

    /// The id currently being exported, used to show a busy button.
    pub fn exporting(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn is_exporting(&self, id: &str) -> bool {
        self.exporting() == Some(id)
    }
}
