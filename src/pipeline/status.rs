//! Transient status message slot with auto-clear

use super::display::{Severity, StatusDisplay};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A message shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub expires_after: Duration,
}

#[derive(Debug, Default)]
struct StatusSlot {
    /// Bumped on every show; a timer only clears the generation it was armed for
    generation: u64,
    current: Option<StatusMessage>,
    timer: Option<JoinHandle<()>>,
}

/// Holds the single visible status message.
///
/// Showing a message arms an auto-clear timer and invalidates the timer of
/// the message it replaces, so an old timer can never hide a newer message.
/// Timers run on the ambient tokio runtime; without one the message stays
/// until replaced or cleared.
pub struct StatusBoard {
    display: Option<Arc<dyn StatusDisplay>>,
    auto_clear: Duration,
    slot: Arc<Mutex<StatusSlot>>,
}

impl StatusBoard {
    pub fn new(display: Option<Arc<dyn StatusDisplay>>, auto_clear: Duration) -> Self {
        Self {
            display,
            auto_clear,
            slot: Arc::new(Mutex::new(StatusSlot::default())),
        }
    }

    /// Replace the visible message and start its auto-clear timer
    pub fn show(&self, text: &str, severity: Severity) -> StatusMessage {
        let message = StatusMessage {
            text: text.to_string(),
            severity,
            expires_after: self.auto_clear,
        };

        let mut slot = lock(&self.slot);
        slot.generation += 1;
        let generation = slot.generation;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = Some(message.clone());

        tracing::debug!("Status ({}): {text}", severity.label());
        match &self.display {
            Some(display) => display.show_status(text, severity),
            None => tracing::debug!("No status display attached, message not rendered"),
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let slot_ref = Arc::clone(&self.slot);
                let display = self.display.clone();
                let delay = self.auto_clear;
                slot.timer = Some(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut slot = lock(&slot_ref);
                    if slot.generation != generation {
                        return;
                    }
                    slot.current = None;
                    slot.timer = None;
                    if let Some(display) = display {
                        display.clear_status();
                    }
                }));
            }
            Err(_) => tracing::warn!("No async runtime, status message will not auto-clear"),
        }

        message
    }

    /// Hide the visible message now
    pub fn clear(&self) {
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        if slot.current.take().is_some() {
            if let Some(display) = &self.display {
                display.clear_status();
            }
        }
    }

    /// The message currently visible, if any
    pub fn current(&self) -> Option<StatusMessage> {
        lock(&self.slot).current.clone()
    }
}

impl Drop for StatusBoard {
    fn drop(&mut self) {
        if let Some(timer) = lock(&self.slot).timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<StatusSlot>) -> MutexGuard<'_, StatusSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
