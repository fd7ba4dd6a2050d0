use std::fmt;
use std::time::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle block segmentation and parsing

/// Token separating the start and end timestamps on an SRT timing line
pub const SRT_RANGE_SEPARATOR: &str = "-->";

// @const: Timestamp regex, matches [H:]MM:SS[.f] after comma normalization.
// The optional leading group encodes the colon-count dispatch: two colons
// mean hours are present, one colon means minutes:seconds only.
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{1,2}):)?(\d{1,2}):(\d{1,2})(?:\.(\d{1,6}))?$").unwrap()
});

// @struct: Maximal run of consecutive non-blank lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    // @field: 1-based line number of the block's first line in the file
    pub start_line: usize,

    // @field: Trimmed, non-empty lines in file order
    pub lines: Vec<String>,
}

/// Subtitle file format, detected once per file from the first block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Sbv,
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleFormat::Srt => write!(f, "SRT"),
            SubtitleFormat::Sbv => write!(f, "SBV"),
        }
    }
}

// @struct: Block whose timing line resolved to start/end times
#[derive(Debug, Clone)]
pub struct ParsedBlock {
    // @field: 1-based line number of the block's first line
    pub start_line: usize,

    // @field: 1-based position of the block in the file
    pub block_number: usize,

    // @field: SRT sequence number, absent for SBV blocks
    pub sequence_index: Option<u64>,

    // @field: Raw timing line as it appeared in the file
    pub timestamp_raw: String,

    // @field: Start time since the beginning of the stream
    pub start_time: Duration,

    // @field: End time since the beginning of the stream
    pub end_time: Duration,

    // @field: Subtitle text lines, may be empty
    pub text_lines: Vec<String>,
}

/// Why a raw block could not be promoted to a [`ParsedBlock`].
///
/// Each variant maps to one format diagnostic; block validation stops at the
/// first of these since the timing and content rules need resolved times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockParseError {
    /// SRT block whose first line is not a bare sequence number
    MissingSequenceIndex,
    /// SRT block with nothing after the sequence number
    MissingTimestampLine,
    /// Start or end token did not parse as a time of day
    InvalidTimestamp {
        /// Raw timing line, kept for the diagnostic context
        timestamp_raw: String,
        /// Text lines, kept for the diagnostic preview
        text_lines: Vec<String>,
    },
}

impl fmt::Display for BlockParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockParseError::MissingSequenceIndex => {
                write!(f, "the first line of an SRT block must be a sequence number")
            }
            BlockParseError::MissingTimestampLine => {
                write!(f, "timestamp line or subtitle text is missing")
            }
            BlockParseError::InvalidTimestamp { .. } => {
                write!(f, "timestamp format is invalid")
            }
        }
    }
}

/// Parse a single timestamp token into a duration since stream start.
///
/// Accepts `H:MM:SS[.f]` and `MM:SS[.f]` with one- or two-digit fields and a
/// fractional part of up to six digits; the fraction separator may be `.` or
/// `,` (SBV renders milliseconds with a comma). Returns `None` for anything
/// else, including out-of-range fields.
pub fn parse_timestamp(token: &str) -> Option<Duration> {
    let normalized = token.trim().replace(',', ".");
    let caps = TIMESTAMP_REGEX.captures(&normalized)?;

    let hours: u64 = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u64 = caps.get(2)?.as_str().parse().ok()?;
    let seconds: u64 = caps.get(3)?.as_str().parse().ok()?;

    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    // Fraction digits are right-padded to microsecond precision, so ".5"
    // reads as 500000us just like a strict time-of-day parse would.
    let micros: u64 = match caps.get(4) {
        Some(m) => format!("{:0<6}", m.as_str()).parse().ok()?,
        None => 0,
    };

    let total_secs = hours * 3600 + minutes * 60 + seconds;
    Some(Duration::from_micros(total_secs * 1_000_000 + micros))
}

/// Split raw file content into blocks of consecutive non-blank lines.
///
/// Blank lines (empty after trimming) separate blocks and are never part of
/// one; a trailing block without a final blank line is still emitted.
pub fn segment_blocks(content: &str) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut current_lines: Vec<String> = Vec::new();
    let mut block_start_line = 0;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            if current_lines.is_empty() {
                block_start_line = index + 1;
            }
            current_lines.push(trimmed.to_string());
        } else if !current_lines.is_empty() {
            blocks.push(RawBlock {
                start_line: block_start_line,
                lines: std::mem::take(&mut current_lines),
            });
        }
    }

    if !current_lines.is_empty() {
        blocks.push(RawBlock {
            start_line: block_start_line,
            lines: current_lines,
        });
    }

    blocks
}

/// Classify a file from its first block.
///
/// A `-->` on the second line wins over everything else (SRT); otherwise a
/// comma in the first line reads as SBV. `None` means the caller must stop
/// the run and report the format as unrecognized.
pub fn detect_format(first_block: &RawBlock) -> Option<SubtitleFormat> {
    if first_block.lines.len() > 1 && first_block.lines[1].contains(SRT_RANGE_SEPARATOR) {
        Some(SubtitleFormat::Srt)
    } else if first_block.lines.first().is_some_and(|line| line.contains(',')) {
        Some(SubtitleFormat::Sbv)
    } else {
        None
    }
}

/// Parse one raw block under the active format.
///
/// SRT blocks carry `index / timing line / text*`, SBV blocks
/// `timing line / text*`. A timing line that does not split into two tokens
/// contributes empty tokens, which the timestamp parser rejects.
pub fn parse_block(
    block: &RawBlock,
    block_number: usize,
    format: SubtitleFormat,
) -> Result<ParsedBlock, BlockParseError> {
    let (sequence_index, timestamp_raw, text_lines, separator) = match format {
        SubtitleFormat::Srt => {
            let first = block.lines.first().map(String::as_str).unwrap_or("");
            if first.is_empty() || !first.chars().all(|c| c.is_ascii_digit()) {
                return Err(BlockParseError::MissingSequenceIndex);
            }
            if block.lines.len() < 2 {
                return Err(BlockParseError::MissingTimestampLine);
            }
            (
                first.parse::<u64>().ok(),
                block.lines[1].clone(),
                block.lines[2..].to_vec(),
                SRT_RANGE_SEPARATOR,
            )
        }
        SubtitleFormat::Sbv => (
            None,
            block.lines.first().cloned().unwrap_or_default(),
            block.lines.get(1..).unwrap_or(&[]).to_vec(),
            ",",
        ),
    };

    let mut tokens = timestamp_raw.split(separator);
    let (start_token, end_token) = match (tokens.next(), tokens.next()) {
        (Some(start), Some(end)) => (start, end),
        _ => ("", ""),
    };

    let (Some(start_time), Some(end_time)) =
        (parse_timestamp(start_token), parse_timestamp(end_token))
    else {
        return Err(BlockParseError::InvalidTimestamp {
            timestamp_raw,
            text_lines,
        });
    };

    Ok(ParsedBlock {
        start_line: block.start_line,
        block_number,
        sequence_index,
        timestamp_raw,
        start_time,
        end_time,
        text_lines,
    })
}
