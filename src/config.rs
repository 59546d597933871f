//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default scroll offset past which the page header is considered scrolled
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 100;
/// Default lifetime of a status message
pub const DEFAULT_MESSAGE_AUTO_CLEAR: Duration = Duration::from_secs(5);
/// `local@domain.tld`, no further RFC checks
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
/// Digits, whitespace, `-`, `+`, `(` and `)`
pub const DEFAULT_TELEPHONE_PATTERN: &str = r"^[0-9\s\-+()]+$";
/// Default bound on a single submission attempt
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default latency of the simulated submitter
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Environment variable naming an alternate config file
const CONFIG_PATH_ENV: &str = "CONTACT_FORM_CONFIG";

/// Settings consumed by the validation and submission pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub scroll_threshold: u32,
    pub message_auto_clear: Duration,
    pub email_pattern: String,
    pub telephone_pattern: String,
    /// `None` waits on the submitter indefinitely
    pub submit_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            message_auto_clear: DEFAULT_MESSAGE_AUTO_CLEAR,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            telephone_pattern: DEFAULT_TELEPHONE_PATTERN.to_string(),
            submit_timeout: Some(DEFAULT_SUBMIT_TIMEOUT),
        }
    }
}

/// User configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Header scroll threshold
    pub scroll_threshold: Option<u32>,
    /// Status message lifetime in milliseconds
    pub message_auto_clear_ms: Option<u64>,
    /// Email validation pattern
    pub email_pattern: Option<String>,
    /// Telephone validation pattern
    pub telephone_pattern: Option<String>,
    /// Submission timeout in milliseconds, 0 disables the timeout
    pub submit_timeout_ms: Option<u64>,
    /// Latency of the simulated submitter in milliseconds
    pub simulated_latency_ms: Option<u64>,
    /// Make the simulated submitter reject every attempt
    pub simulate_failure: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Fill unset values with defaults
    pub fn resolve(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            scroll_threshold: self.scroll_threshold.unwrap_or(defaults.scroll_threshold),
            message_auto_clear: self
                .message_auto_clear_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.message_auto_clear),
            email_pattern: self
                .email_pattern
                .clone()
                .unwrap_or(defaults.email_pattern),
            telephone_pattern: self
                .telephone_pattern
                .clone()
                .unwrap_or(defaults.telephone_pattern),
            submit_timeout: match self.submit_timeout_ms {
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms)),
                None => defaults.submit_timeout,
            },
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SIMULATED_LATENCY)
    }
}
