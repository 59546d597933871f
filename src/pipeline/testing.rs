//! Test doubles shared by the pipeline tests

use super::display::{Severity, StatusDisplay};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Indicator(String, bool),
    Status(String, Severity),
    Cleared,
    Reset,
}

/// Display that records every call in order
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingDisplay {
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.count(|e| matches!(e, DisplayEvent::Cleared))
    }

    pub fn reset_count(&self) -> usize {
        self.count(|e| matches!(e, DisplayEvent::Reset))
    }

    /// Last indicator reported for a field
    pub fn indicator(&self, field: &str) -> Option<bool> {
        self.events().iter().rev().find_map(|e| match e {
            DisplayEvent::Indicator(name, valid) if name == field => Some(*valid),
            _ => None,
        })
    }

    pub fn last_status(&self) -> Option<(String, Severity)> {
        self.events().iter().rev().find_map(|e| match e {
            DisplayEvent::Status(text, severity) => Some((text.clone(), *severity)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&DisplayEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }

    fn push(&self, event: DisplayEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl StatusDisplay for RecordingDisplay {
    fn set_field_indicator(&self, field: &str, valid: bool) {
        self.push(DisplayEvent::Indicator(field.to_string(), valid));
    }

    fn show_status(&self, text: &str, severity: Severity) {
        self.push(DisplayEvent::Status(text.to_string(), severity));
    }

    fn clear_status(&self) {
        self.push(DisplayEvent::Cleared);
    }

    fn reset_form(&self) {
        self.push(DisplayEvent::Reset);
    }
}
