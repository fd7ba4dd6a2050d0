/*!
 * Validation module for subtitle quality checks.
 *
 * This module runs the ordered rule sequence over a parsed subtitle file:
 * - Timing validation (interval ordering, minimum duration, overlaps)
 * - Content validation (line count, line width, reading speed)
 * - Diagnostic collection and report rendering
 *
 * # Architecture
 *
 * - `timing`: Validates block timing against the previous block
 * - `content`: Validates text layout and reading speed
 * - `report`: Diagnostic value types and their fixed-shape rendering
 * - `service`: Orchestrates parsing and all validators over one file
 */

pub mod content;
pub mod report;
pub mod service;
pub mod timing;

// Re-export main types
pub use report::{CheckReport, Diagnostic, DiagnosticCategory};
pub use service::{RunState, ValidationConfig, ValidationService};
