/*!
 * Timing validation for parsed subtitle blocks.
 *
 * This module validates that block timings are:
 * - Logically consistent (start strictly before end)
 * - Long enough to be displayed
 * - Non-overlapping with the previous block
 */

use std::time::Duration;

use crate::subtitle_processor::ParsedBlock;

/// Minimum display duration in milliseconds
const DEFAULT_MIN_DURATION_MS: u64 = 100;

/// Types of timing issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimingIssue {
    /// End time is equal to or earlier than the start time
    EndNotAfterStart,
    /// Display duration is below the configured minimum; the duration is
    /// signed so an inverted interval reports a negative value
    DurationTooShort { duration_secs: f64 },
    /// Block starts before the previous block's end time
    OverlapsPrevious,
}

impl std::fmt::Display for TimingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingIssue::EndNotAfterStart => {
                write!(f, "end time is not after the start time")
            }
            TimingIssue::DurationTooShort { duration_secs } => {
                write!(f, "display duration is too short ({:.3}s)", duration_secs)
            }
            TimingIssue::OverlapsPrevious => {
                write!(f, "overlaps the previous subtitle")
            }
        }
    }
}

/// Configuration for timing validation
#[derive(Debug, Clone)]
pub struct TimingValidatorConfig {
    /// Minimum display duration in ms
    pub min_duration_ms: u64,
}

impl Default for TimingValidatorConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: DEFAULT_MIN_DURATION_MS,
        }
    }
}

/// Timing validator for parsed blocks
pub struct TimingValidator {
    config: TimingValidatorConfig,
}

impl TimingValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: TimingValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TimingValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate one block against the previous block's end time.
    ///
    /// All three rules run unconditionally and in order; an inverted
    /// interval does not stop the duration or overlap checks.
    pub fn validate(&self, block: &ParsedBlock, last_end_time: Duration) -> Vec<TimingIssue> {
        let mut issues = Vec::new();

        if block.start_time >= block.end_time {
            issues.push(TimingIssue::EndNotAfterStart);
        }

        let duration_secs = block.end_time.as_secs_f64() - block.start_time.as_secs_f64();
        if duration_secs * 1000.0 < self.config.min_duration_ms as f64 {
            issues.push(TimingIssue::DurationTooShort { duration_secs });
        }

        if block.start_time < last_end_time {
            issues.push(TimingIssue::OverlapsPrevious);
        }

        issues
    }
}

impl Default for TimingValidator {
    fn default() -> Self {
        Self::new()
    }
}
