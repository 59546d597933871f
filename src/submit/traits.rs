//! Trait abstraction for the submission backend to enable mocking in tests

use super::snapshot::FormSnapshot;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure reported for a submit attempt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend answered and refused the message
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),
    /// The submission task ended without producing a result
    #[error("submission task aborted")]
    Aborted,
}

/// Backend that receives captured form values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, snapshot: FormSnapshot) -> Result<(), SubmissionError>;
}
