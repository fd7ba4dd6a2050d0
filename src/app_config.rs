use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Validation thresholds and optional check toggles
    #[serde(default)]
    pub checks: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.checks.max_chars_per_line == 0 {
            return Err(anyhow!("max_chars_per_line must be at least 1"));
        }

        if self.checks.max_lines_per_block == 0 {
            return Err(anyhow!("max_lines_per_block must be at least 1"));
        }

        if !(self.checks.max_chars_per_second > 0.0) {
            return Err(anyhow!("max_chars_per_second must be a positive number"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            checks: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
