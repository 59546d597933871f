//! Per-field validation rules

use crate::config::PipelineConfig;
use crate::form::{FieldKind, FormField};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {kind} pattern `{pattern}`: {source}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled format checks for constrained field kinds
#[derive(Debug, Clone)]
pub struct FieldRules {
    email: Regex,
    telephone: Regex,
}

impl FieldRules {
    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            email: compile("email", &config.email_pattern)?,
            telephone: compile("telephone", &config.telephone_pattern)?,
        })
    }

    /// Whether the field's current value passes its declared rules.
    ///
    /// The value is trimmed of whitespace and byte order marks before every
    /// check. Pure: depends on nothing but the field.
    pub fn check(&self, field: &FormField) -> bool {
        let value = field.trimmed_value();

        if value.is_empty() {
            return !field.required;
        }

        match field.kind {
            FieldKind::Email => self.email.is_match(value),
            FieldKind::Telephone => self.telephone.is_match(value),
            FieldKind::Text | FieldKind::Other => true,
        }
    }
}

fn compile(kind: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}
