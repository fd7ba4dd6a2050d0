/*!
 * # subcheck - Subtitle File Checker
 *
 * A Rust library for validating subtitle files before publication.
 *
 * ## Features
 *
 * - Parse SRT and SBV subtitle files into timed blocks
 * - Validate format integrity (sequence numbers, timestamp lines)
 * - Validate timing (interval ordering, minimum duration, overlaps)
 * - Validate readability (line count, line width, reading speed)
 * - Human-readable diagnostics grouped by category
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Block segmentation, format detection and parsing
 * - `validation`: The rule engine and diagnostics:
 *   - `validation::timing`: Interval ordering, duration and overlap rules
 *   - `validation::content`: Layout and reading-speed rules
 *   - `validation::report`: Diagnostic types and rendering
 *   - `validation::service`: Orchestration over one file
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, SubtitleError};
pub use subtitle_processor::{ParsedBlock, RawBlock, SubtitleFormat};
pub use validation::{CheckReport, Diagnostic, DiagnosticCategory, ValidationConfig, ValidationService};
