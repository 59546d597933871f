//! Rendering collaborator consumed by the pipeline

use serde::{Deserialize, Serialize};

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Surface the pipeline renders validation state and status messages onto
#[cfg_attr(test, mockall::automock)]
pub trait StatusDisplay: Send + Sync {
    /// Mark a field as valid or invalid
    fn set_field_indicator(&self, field: &str, valid: bool);

    /// Show a status message, replacing any visible one
    fn show_status(&self, text: &str, severity: Severity);

    /// Hide the status message
    fn clear_status(&self);

    /// Called after a successful submission cleared the field values
    fn reset_form(&self) {}
}
