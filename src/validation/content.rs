/*!
 * Content validation for subtitle text.
 *
 * This module validates readability of the text attached to a block:
 * - Number of text lines per block
 * - Width-weighted line length (full-width characters count double)
 * - Reading speed in characters per second
 */

/// Maximum line width in full-width-equivalent characters
const DEFAULT_MAX_CHARS_PER_LINE: usize = 25;

/// Maximum number of text lines per block
const DEFAULT_MAX_LINES_PER_BLOCK: usize = 2;

/// Maximum characters per second for readable subtitles
const DEFAULT_MAX_CPS: f64 = 20.0;

/// How many characters of the offending line the layout message embeds
const LINE_PREVIEW_CHARS: usize = 15;

/// Types of content issues
#[derive(Debug, Clone, PartialEq)]
pub enum ContentIssue {
    /// Block has more text lines than allowed
    TooManyLines { line_count: usize },
    /// One line exceeds the width budget; the preview names the line
    LineTooWide {
        line_preview: String,
        max_chars: usize,
    },
    /// Text is too dense for its display duration
    ReadingSpeedTooHigh { cps: f64 },
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentIssue::TooManyLines { line_count } => {
                write!(f, "too many text lines ({} lines)", line_count)
            }
            ContentIssue::LineTooWide {
                line_preview,
                max_chars,
            } => {
                write!(
                    f,
                    "line exceeds the {} full-width character limit: \"{}...\"",
                    max_chars, line_preview
                )
            }
            ContentIssue::ReadingSpeedTooHigh { cps } => {
                write!(f, "subtitle reads too fast ({:.1} CPS)", cps)
            }
        }
    }
}

/// Configuration for content validation
#[derive(Debug, Clone)]
pub struct ContentValidatorConfig {
    /// Maximum line width in full-width-equivalent characters
    pub max_chars_per_line: usize,
    /// Maximum text lines per block
    pub max_lines_per_block: usize,
    /// Maximum characters per second
    pub max_chars_per_second: f64,
}

impl Default for ContentValidatorConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_lines_per_block: DEFAULT_MAX_LINES_PER_BLOCK,
            max_chars_per_second: DEFAULT_MAX_CPS,
        }
    }
}

/// Content validator for block text
pub struct ContentValidator {
    config: ContentValidatorConfig,
}

impl ContentValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: ContentValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ContentValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate line count and per-line width.
    ///
    /// The width rule runs independently per line, so one block can report
    /// several over-wide lines.
    pub fn validate_layout(&self, text_lines: &[String]) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        if text_lines.len() > self.config.max_lines_per_block {
            issues.push(ContentIssue::TooManyLines {
                line_count: text_lines.len(),
            });
        }

        for line in text_lines {
            if full_width_len(line) > self.config.max_chars_per_line * 2 {
                issues.push(ContentIssue::LineTooWide {
                    line_preview: line.chars().take(LINE_PREVIEW_CHARS).collect(),
                    max_chars: self.config.max_chars_per_line,
                });
            }
        }

        issues
    }

    /// Validate reading speed over the whole block.
    ///
    /// Character counts are raw (not width-weighted). A non-positive
    /// duration skips the check; the minimum-duration rule already covers
    /// that case.
    pub fn validate_reading_speed(
        &self,
        text_lines: &[String],
        duration_secs: f64,
    ) -> Option<ContentIssue> {
        if duration_secs <= 0.0 {
            return None;
        }

        let total_chars: usize = text_lines.iter().map(|line| line.chars().count()).sum();
        let cps = total_chars as f64 / duration_secs;

        if cps > self.config.max_chars_per_second {
            Some(ContentIssue::ReadingSpeedTooHigh { cps })
        } else {
            None
        }
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Width-weighted length of a line: characters whose UTF-8 encoding is
/// longer than one byte count as 2 units, everything else as 1.
pub fn full_width_len(line: &str) -> usize {
    line.chars()
        .map(|c| if c.len_utf8() > 1 { 2 } else { 1 })
        .sum()
}
