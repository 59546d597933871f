//! Validation and submission state machine for the contact form

use super::display::{Severity, StatusDisplay};
use super::error::{PipelineError, ValidationError};
use super::rules::FieldRules;
use super::status::StatusBoard;
use crate::config::PipelineConfig;
use crate::form::{ContactForm, FormField};
use crate::submit::{FormSnapshot, SubmissionError, Submitter};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const INVALID_FORM_MESSAGE: &str = "Please fill in every field correctly.";
pub const SUCCESS_MESSAGE: &str = "Message sent! We will be in touch soon.";
pub const FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Where a submit attempt currently stands.
///
/// `Idle -> Validating -> Submitting -> {Succeeded, Failed}`, or
/// `Validating -> Rejected`. The terminal phases are transient; the
/// pipeline settles back to `Idle` and records them in `last_phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
    Rejected,
}

/// Result of asking the pipeline to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed, nothing was sent
    Rejected(ValidationError),
    /// A submission task is in flight for this snapshot id
    Started(Uuid),
    /// Another submission is still in flight
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(SubmissionError),
}

/// Per-field verdict of one validation pass
#[derive(Debug, Clone, Copy)]
pub struct ValidationResult<'a> {
    pub field: &'a FormField,
    pub valid: bool,
}

/// Owns the contact form and drives validation, submission and status
/// messages against injected collaborators.
pub struct ContactPipeline {
    config: PipelineConfig,
    rules: FieldRules,
    form: ContactForm,
    display: Option<Arc<dyn StatusDisplay>>,
    submitter: Arc<dyn Submitter>,
    status: StatusBoard,
    phase: SubmitPhase,
    last_phase: Option<SubmitPhase>,
    in_flight: Option<JoinHandle<Result<(), SubmissionError>>>,
}

impl ContactPipeline {
    pub fn new(
        config: PipelineConfig,
        form: ContactForm,
        submitter: Arc<dyn Submitter>,
    ) -> Result<Self, PipelineError> {
        let rules = FieldRules::from_config(&config)?;
        let status = StatusBoard::new(None, config.message_auto_clear);
        Ok(Self {
            config,
            rules,
            form,
            display: None,
            submitter,
            status,
            phase: SubmitPhase::Idle,
            last_phase: None,
            in_flight: None,
        })
    }

    /// Attach the surface indicators and status messages are rendered on
    pub fn with_display(mut self, display: Arc<dyn StatusDisplay>) -> Self {
        self.status = StatusBoard::new(Some(Arc::clone(&display)), self.config.message_auto_clear);
        self.display = Some(display);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Terminal phase of the most recent submit attempt
    pub fn last_phase(&self) -> Option<SubmitPhase> {
        self.last_phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn display(&self) -> Result<&Arc<dyn StatusDisplay>, PipelineError> {
        self.display
            .as_ref()
            .ok_or(PipelineError::CollaboratorUnavailable("display"))
    }

    /// Pure rule check of a single field against its current value
    pub fn check_field(&self, field: &FormField) -> bool {
        self.rules.check(field)
    }

    /// Validate a field by name and report its indicator.
    ///
    /// Returns `None` when the form has no such field.
    pub fn validate_field(&self, name: &str) -> Option<bool> {
        let field = self.form.field(name)?;
        let valid = self.rules.check(field);
        tracing::debug!("Field {name} valid={valid}");
        self.report_indicator(name, valid);
        Some(valid)
    }

    /// Check every field without reporting anything
    pub fn validation_results(&self) -> Vec<ValidationResult<'_>> {
        self.form
            .fields()
            .iter()
            .map(|field| ValidationResult {
                field,
                valid: self.rules.check(field),
            })
            .collect()
    }

    /// Validate every field, report every indicator, and return whether all
    /// passed. Never stops at the first failure.
    pub fn validate_form(&self) -> bool {
        self.validate_all().is_ok()
    }

    fn validate_all(&self) -> Result<(), ValidationError> {
        let results = self.validation_results();
        for result in &results {
            self.report_indicator(&result.field.name, result.valid);
        }

        let invalid_fields: Vec<String> = results
            .iter()
            .filter(|r| !r.valid)
            .map(|r| r.field.name.clone())
            .collect();

        if invalid_fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { invalid_fields })
        }
    }

    /// Validate and, when valid, spawn the submission without waiting on it.
    ///
    /// The caller's event loop picks the result up with
    /// [`poll_submission`](Self::poll_submission) or
    /// [`finish_submission`](Self::finish_submission). Must be called from
    /// within a tokio runtime.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return SubmitAttempt::Ignored;
        }

        self.phase = SubmitPhase::Validating;
        if let Err(err) = self.validate_all() {
            tracing::debug!("Submit rejected: {err}");
            self.settle(SubmitPhase::Rejected);
            self.status.show(INVALID_FORM_MESSAGE, Severity::Error);
            return SubmitAttempt::Rejected(err);
        }

        self.phase = SubmitPhase::Submitting;
        let snapshot = FormSnapshot::capture(&self.form);
        let id = snapshot.id;
        tracing::info!("Submitting form {id}");

        let submitter = Arc::clone(&self.submitter);
        let timeout = self.config.submit_timeout;
        self.in_flight = Some(tokio::spawn(async move {
            match timeout {
                Some(limit) => tokio::time::timeout(limit, submitter.submit(snapshot))
                    .await
                    .unwrap_or(Err(SubmissionError::Timeout(limit))),
                None => submitter.submit(snapshot).await,
            }
        }));

        SubmitAttempt::Started(id)
    }

    /// Complete the in-flight submission if it has finished
    pub async fn poll_submission(&mut self) -> Option<SubmissionOutcome> {
        if self.in_flight.as_ref().is_some_and(|h| h.is_finished()) {
            self.finish_submission().await
        } else {
            None
        }
    }

    /// Wait for the in-flight submission and apply its outcome
    pub async fn finish_submission(&mut self) -> Option<SubmissionOutcome> {
        let handle = self.in_flight.take()?;
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Submission task failed: {e}");
                Err(SubmissionError::Aborted)
            }
        };
        Some(self.complete(result))
    }

    /// Run a whole submit attempt and return the phase it ended in.
    ///
    /// Returns `Submitting` when another submission was already in flight
    /// and this attempt was ignored.
    pub async fn submit(&mut self) -> SubmitPhase {
        match self.begin_submit() {
            SubmitAttempt::Rejected(_) => SubmitPhase::Rejected,
            SubmitAttempt::Ignored => SubmitPhase::Submitting,
            SubmitAttempt::Started(_) => match self.finish_submission().await {
                Some(SubmissionOutcome::Success) => SubmitPhase::Succeeded,
                Some(SubmissionOutcome::Failure(_)) | None => SubmitPhase::Failed,
            },
        }
    }

    fn complete(&mut self, result: Result<(), SubmissionError>) -> SubmissionOutcome {
        match result {
            Ok(()) => {
                tracing::info!("Form submitted");
                self.settle(SubmitPhase::Succeeded);
                self.status.show(SUCCESS_MESSAGE, Severity::Success);
                self.form.reset();
                if let Ok(display) = self.display() {
                    display.reset_form();
                }
                SubmissionOutcome::Success
            }
            Err(err) => {
                tracing::warn!("Form submission failed: {err}");
                self.settle(SubmitPhase::Failed);
                self.status.show(FAILURE_MESSAGE, Severity::Error);
                SubmissionOutcome::Failure(err)
            }
        }
    }

    fn settle(&mut self, terminal: SubmitPhase) {
        self.last_phase = Some(terminal);
        self.phase = SubmitPhase::Idle;
    }

    fn report_indicator(&self, name: &str, valid: bool) {
        match self.display() {
            Ok(display) => display.set_field_indicator(name, valid),
            Err(e) => tracing::debug!("Indicator for {name} not rendered: {e}"),
        }
    }
}

impl Drop for ContactPipeline {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
