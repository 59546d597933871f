//! Pipeline error kinds

use super::rules::ConfigError;
use thiserror::Error;

/// One or more fields failed their rules. User-correctable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid fields: {}", invalid_fields.join(", "))]
pub struct ValidationError {
    pub invalid_fields: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The named collaborator is not attached; the feature no-ops
    #[error("no {0} collaborator attached")]
    CollaboratorUnavailable(&'static str),
}
