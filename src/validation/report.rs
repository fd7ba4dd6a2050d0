/*!
 * Diagnostic types and report rendering.
 *
 * A [`Diagnostic`] is one rule violation tied to a location in the source
 * file; its `Display` impl is the fixed-shape report used by the CLI. The
 * [`CheckReport`] aggregate keeps the diagnostics in evaluation order and
 * offers the category grouping the presentation layer prints.
 */

use std::fmt;

/// How many characters of the first text line the preview keeps
const PREVIEW_CHARS: usize = 30;

/// Placeholder shown when a block has no text to preview
const NO_TEXT_PLACEHOLDER: &str = "(no text)";

/// Placeholder shown when a block failed before its timing line was found
pub const UNKNOWN_TIMESTAMP: &str = "(unknown)";

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticCategory {
    /// Structural problems: bad sequence index, missing fields, unparsable
    /// timestamps, missing text
    FormatError,
    /// Temporal problems: inverted interval, too-short duration, overlap
    TimingError,
    /// Readability problems: layout limits, reading speed
    ContentError,
}

impl DiagnosticCategory {
    /// All categories in report order
    pub const ALL: [DiagnosticCategory; 3] = [
        DiagnosticCategory::FormatError,
        DiagnosticCategory::TimingError,
        DiagnosticCategory::ContentError,
    ];
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::FormatError => write!(f, "Format error"),
            DiagnosticCategory::TimingError => write!(f, "Timing error"),
            DiagnosticCategory::ContentError => write!(f, "Content error"),
        }
    }
}

/// One rule violation, located in the checked file
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Category the violation belongs to
    pub category: DiagnosticCategory,
    /// Human-readable description of the violation
    pub message: String,
    /// 1-based line number of the offending block's first line
    pub start_line: usize,
    /// 1-based number of the offending block
    pub block_number: usize,
    /// Raw timing line, or [`UNKNOWN_TIMESTAMP`]
    pub timestamp_context: String,
    /// First text line truncated for display
    pub text_preview: String,
}

impl Diagnostic {
    /// Create a diagnostic, deriving the text preview from the block's lines
    pub fn new(
        category: DiagnosticCategory,
        message: String,
        start_line: usize,
        block_number: usize,
        timestamp_context: &str,
        text_lines: &[String],
    ) -> Self {
        Self {
            category,
            message,
            start_line,
            block_number,
            timestamp_context: timestamp_context.to_string(),
            text_preview: preview_from_lines(text_lines),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[line {} / block {}] {}: {}",
            self.start_line, self.block_number, self.category, self.message
        )?;
        writeln!(f, "  -> timestamp: {}", self.timestamp_context)?;
        write!(f, "  -> text: {}", self.text_preview)
    }
}

/// Truncate the first text line for display, character-wise
fn preview_from_lines(text_lines: &[String]) -> String {
    match text_lines.first() {
        Some(line) => format!("\"{}...\"", line.chars().take(PREVIEW_CHARS).collect::<String>()),
        None => NO_TEXT_PLACEHOLDER.to_string(),
    }
}

/// Complete result of one validation run over one file
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Diagnostics in block evaluation order
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Wrap an ordered diagnostic list
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// True when the run produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Total number of diagnostics
    pub fn total(&self) -> usize {
        self.diagnostics.len()
    }

    /// Diagnostics belonging to one category, in evaluation order
    pub fn in_category(&self, category: DiagnosticCategory) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Number of diagnostics per category, in report order, zero counts skipped
    pub fn category_counts(&self) -> Vec<(DiagnosticCategory, usize)> {
        DiagnosticCategory::ALL
            .iter()
            .map(|&category| {
                (
                    category,
                    self.diagnostics.iter().filter(|d| d.category == category).count(),
                )
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_clean() {
            "Check complete: no issues found".to_string()
        } else {
            format!("Check complete: {} issue(s) found", self.total())
        }
    }
}
