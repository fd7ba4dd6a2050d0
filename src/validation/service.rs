/*!
 * Validation service that orchestrates a whole check run.
 *
 * This module drives one pass over a subtitle file: segmentation, format
 * detection, per-block parsing and the fixed sequence of validation rules,
 * collecting diagnostics in evaluation order.
 */

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::subtitle_processor::{
    BlockParseError, ParsedBlock, RawBlock, SubtitleFormat, detect_format, parse_block,
    segment_blocks,
};

use super::content::{ContentValidator, ContentValidatorConfig};
use super::report::{CheckReport, Diagnostic, DiagnosticCategory, UNKNOWN_TIMESTAMP};
use super::timing::{TimingValidator, TimingValidatorConfig};

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum line width in full-width-equivalent characters
    #[serde(default = "default_max_chars_per_line")]
    pub max_chars_per_line: usize,

    /// Maximum number of text lines per block
    #[serde(default = "default_max_lines_per_block")]
    pub max_lines_per_block: usize,

    /// Minimum display duration in milliseconds
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,

    /// Maximum characters per second for readable subtitles
    #[serde(default = "default_max_cps")]
    pub max_chars_per_second: f64,

    /// Whether to check line count and line width
    #[serde(default = "default_true")]
    pub check_content_layout: bool,

    /// Whether to check reading speed
    #[serde(default = "default_true")]
    pub check_reading_speed: bool,
}

fn default_max_chars_per_line() -> usize {
    25
}

fn default_max_lines_per_block() -> usize {
    2
}

fn default_min_duration_ms() -> u64 {
    100
}

fn default_max_cps() -> f64 {
    20.0
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: default_max_chars_per_line(),
            max_lines_per_block: default_max_lines_per_block(),
            min_duration_ms: default_min_duration_ms(),
            max_chars_per_second: default_max_cps(),
            check_content_layout: true,
            check_reading_speed: true,
        }
    }
}

/// State carried across blocks during one run.
///
/// Overlap detection compares each block's start time against the end time
/// of the previous successfully timed block, so blocks must be validated in
/// file order.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// End time of the last block whose timestamps resolved
    pub last_end_time: Duration,
}

/// Validation service for subtitle files
pub struct ValidationService {
    config: ValidationConfig,
    timing_validator: TimingValidator,
    content_validator: ContentValidator,
}

impl ValidationService {
    /// Create a new validation service with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validation service with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        let timing_config = TimingValidatorConfig {
            min_duration_ms: config.min_duration_ms,
        };

        let content_config = ContentValidatorConfig {
            max_chars_per_line: config.max_chars_per_line,
            max_lines_per_block: config.max_lines_per_block,
            max_chars_per_second: config.max_chars_per_second,
        };

        Self {
            config,
            timing_validator: TimingValidator::with_config(timing_config),
            content_validator: ContentValidator::with_config(content_config),
        }
    }

    /// Check a whole file's content and return the collected diagnostics.
    ///
    /// The only fatal outcome is an unrecognizable first block; every
    /// per-block problem becomes a diagnostic and the run continues.
    pub fn check_content(&self, content: &str) -> Result<CheckReport, SubtitleError> {
        let blocks = segment_blocks(content);

        let format = blocks
            .first()
            .and_then(detect_format)
            .ok_or(SubtitleError::UnrecognizedFormat)?;

        debug!("Detected {} format, {} block(s)", format, blocks.len());

        let mut state = RunState::default();
        let mut diagnostics = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            diagnostics.extend(self.validate_block(block, index + 1, format, &mut state));
        }

        debug!("Validation complete: {} diagnostic(s)", diagnostics.len());

        Ok(CheckReport::new(diagnostics))
    }

    /// Validate one raw block and advance the run state.
    ///
    /// A block whose timestamps never resolve does not advance
    /// `last_end_time`; every other block does, even when it produced
    /// diagnostics of its own.
    pub fn validate_block(
        &self,
        block: &RawBlock,
        block_number: usize,
        format: SubtitleFormat,
        state: &mut RunState,
    ) -> Vec<Diagnostic> {
        let parsed = match parse_block(block, block_number, format) {
            Ok(parsed) => parsed,
            Err(error) => {
                return vec![self.parse_error_diagnostic(block, block_number, error)];
            }
        };

        let mut diagnostics = Vec::new();

        for issue in self.timing_validator.validate(&parsed, state.last_end_time) {
            diagnostics.push(block_diagnostic(
                DiagnosticCategory::TimingError,
                issue.to_string(),
                &parsed,
            ));
        }

        if parsed.text_lines.is_empty() {
            diagnostics.push(block_diagnostic(
                DiagnosticCategory::FormatError,
                "subtitle text is missing".to_string(),
                &parsed,
            ));
        } else {
            if self.config.check_content_layout {
                for issue in self.content_validator.validate_layout(&parsed.text_lines) {
                    diagnostics.push(block_diagnostic(
                        DiagnosticCategory::ContentError,
                        issue.to_string(),
                        &parsed,
                    ));
                }
            }

            if self.config.check_reading_speed {
                let duration_secs =
                    parsed.end_time.as_secs_f64() - parsed.start_time.as_secs_f64();
                if let Some(issue) = self
                    .content_validator
                    .validate_reading_speed(&parsed.text_lines, duration_secs)
                {
                    diagnostics.push(block_diagnostic(
                        DiagnosticCategory::ContentError,
                        issue.to_string(),
                        &parsed,
                    ));
                }
            }
        }

        state.last_end_time = parsed.end_time;

        diagnostics
    }

    /// Turn a block parse failure into its format diagnostic.
    ///
    /// Failures before the timing line is identified fall back to the raw
    /// block lines for the preview and an unknown-timestamp placeholder.
    fn parse_error_diagnostic(
        &self,
        block: &RawBlock,
        block_number: usize,
        error: BlockParseError,
    ) -> Diagnostic {
        let message = error.to_string();
        match error {
            BlockParseError::MissingSequenceIndex | BlockParseError::MissingTimestampLine => {
                Diagnostic::new(
                    DiagnosticCategory::FormatError,
                    message,
                    block.start_line,
                    block_number,
                    UNKNOWN_TIMESTAMP,
                    &block.lines,
                )
            }
            BlockParseError::InvalidTimestamp {
                timestamp_raw,
                text_lines,
            } => Diagnostic::new(
                DiagnosticCategory::FormatError,
                message,
                block.start_line,
                block_number,
                &timestamp_raw,
                &text_lines,
            ),
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic for a fully parsed block, with its timing line as context
fn block_diagnostic(
    category: DiagnosticCategory,
    message: String,
    parsed: &ParsedBlock,
) -> Diagnostic {
    Diagnostic::new(
        category,
        message,
        parsed.start_line,
        parsed.block_number,
        &parsed.timestamp_raw,
        &parsed.text_lines,
    )
}
