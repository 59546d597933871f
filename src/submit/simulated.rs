//! Stand-in submitter for local use
//!
//! Logs the captured values and answers after a fixed latency. Swap in a
//! real backend by implementing [`Submitter`].

use super::snapshot::FormSnapshot;
use super::traits::{SubmissionError, Submitter};
use async_trait::async_trait;
use std::time::Duration;

pub struct SimulatedSubmitter {
    latency: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    /// Submitter that accepts every snapshot after `latency`
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail: false,
        }
    }

    /// Submitter that rejects every snapshot after `latency`
    pub fn failing(latency: Duration) -> Self {
        Self {
            latency,
            fail: true,
        }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, snapshot: FormSnapshot) -> Result<(), SubmissionError> {
        match serde_json::to_string(&snapshot) {
            Ok(json) => tracing::info!("Form data: {json}"),
            Err(e) => tracing::warn!("Could not serialize snapshot {}: {e}", snapshot.id),
        }

        tokio::time::sleep(self.latency).await;

        if self.fail {
            return Err(SubmissionError::Rejected("simulated failure".to_string()));
        }
        Ok(())
    }
}
