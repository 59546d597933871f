//! Submission backends

mod simulated;
mod snapshot;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use snapshot::FormSnapshot;
pub use traits::{SubmissionError, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
