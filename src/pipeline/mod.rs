//! Field validation and submission pipeline
//!
//! - `rules`: per-field format and required checks
//! - `status`: single status message slot with auto-clear
//! - `display`: rendering collaborator trait
//! - `contact_pipeline`: the submit state machine tying them together

mod contact_pipeline;
mod display;
mod error;
mod rules;
mod status;

#[cfg(test)]
mod testing;

pub use contact_pipeline::{
    ContactPipeline, SubmissionOutcome, SubmitAttempt, SubmitPhase, ValidationResult,
    FAILURE_MESSAGE, INVALID_FORM_MESSAGE, SUCCESS_MESSAGE,
};
pub use display::{Severity, StatusDisplay};
pub use error::{PipelineError, ValidationError};
pub use rules::{ConfigError, FieldRules};
pub use status::{StatusBoard, StatusMessage};

