//! Display collaborator backing the terminal front end

use crate::pipeline::{Severity, StatusDisplay};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Rendered {
    indicators: HashMap<String, bool>,
    status: Option<(String, Severity)>,
}

/// Keeps what the pipeline last rendered so the draw pass can read it
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    rendered: Mutex<Rendered>,
}

impl TerminalDisplay {
    /// Last indicator reported for a field, `None` if never validated
    pub fn indicator(&self, field: &str) -> Option<bool> {
        self.lock().indicators.get(field).copied()
    }

    pub fn status(&self) -> Option<(String, Severity)> {
        self.lock().status.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Rendered> {
        self.rendered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusDisplay for TerminalDisplay {
    fn set_field_indicator(&self, field: &str, valid: bool) {
        self.lock().indicators.insert(field.to_string(), valid);
    }

    fn show_status(&self, text: &str, severity: Severity) {
        self.lock().status = Some((text.to_string(), severity));
    }

    fn clear_status(&self) {
        self.lock().status = None;
    }

    fn reset_form(&self) {
        self.lock().indicators.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_latest_indicator() {
        let display = TerminalDisplay::default();
        assert_eq!(display.indicator("email"), None);
        display.set_field_indicator("email", false);
        display.set_field_indicator("email", true);
        assert_eq!(display.indicator("email"), Some(true));
    }

    #[test]
    fn test_status_show_and_clear() {
        let display = TerminalDisplay::default();
        display.show_status("Sent", Severity::Success);
        assert_eq!(
            display.status(),
            Some(("Sent".to_string(), Severity::Success))
        );
        display.clear_status();
        assert!(display.status().is_none());
    }

    #[test]
    fn test_reset_clears_indicators_but_keeps_status() {
        let display = TerminalDisplay::default();
        display.set_field_indicator("name", true);
        display.show_status("Sent", Severity::Success);
        display.reset_form();
        assert_eq!(display.indicator("name"), None);
        assert!(display.status().is_some());
    }
}
