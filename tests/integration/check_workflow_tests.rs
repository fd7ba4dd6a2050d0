/*!
 * End-to-end check workflow tests driving the controller against real files
 */

use anyhow::Result;
use subcheck::app_config::Config;
use subcheck::app_controller::Controller;
use subcheck::validation::DiagnosticCategory;
use crate::common;

/// Test a clean SRT file end to end
#[test]
fn test_run_withCleanSrtFile_shouldReportNoIssues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = common::create_test_srt(&temp_dir.path().to_path_buf(), "clean.srt")?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(&file_path)?;

    assert!(report.is_clean());
    Ok(())
}

/// Test a clean SBV file end to end
#[test]
fn test_run_withCleanSbvFile_shouldReportNoIssues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = common::create_test_sbv(&temp_dir.path().to_path_buf(), "clean.sbv")?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(&file_path)?;

    assert!(report.is_clean());
    Ok(())
}

/// Test a file with timing problems end to end
#[test]
fn test_run_withOverlappingShortBlock_shouldReportTimingErrors() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "1\n00:00:01,000 --> 00:00:05,000\nFirst\n\n2\n00:00:04,000 --> 00:00:04,090\nx\n";
    let file_path =
        common::create_test_file(&temp_dir.path().to_path_buf(), "broken.srt", content)?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(&file_path)?;

    assert_eq!(report.total(), 2);
    assert_eq!(report.in_category(DiagnosticCategory::TimingError).len(), 2);
    assert!(report
        .diagnostics
        .iter()
        .all(|d| d.block_number == 2 && d.start_line == 5));
    Ok(())
}

/// Test that a missing input file is a terminal failure
#[test]
fn test_run_withMissingFile_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;

    let result = controller.run("definitely/not/here.srt");

    assert!(result.is_err());
    Ok(())
}

/// Test that an unrecognizable file is a terminal failure, not a diagnostic
#[test]
fn test_run_withUnrecognizableFile_shouldFailWithFormatMessage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "notes.srt",
        "Some meeting notes.\nNothing subtitle-shaped.\n",
    )?;

    let controller = Controller::new_for_test()?;
    let result = controller.run(&file_path);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("not recognized"));
    Ok(())
}

/// Test that CLI-style config overrides flow through the whole run
#[test]
fn test_run_withCustomConfig_shouldApplyThresholds() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // 20 characters per line, fine by default but over a budget of 8
    let content = "1\n00:00:01,000 --> 00:00:10,000\ntwenty characters ok\n";
    let file_path =
        common::create_test_file(&temp_dir.path().to_path_buf(), "tight.srt", content)?;

    let mut config = Config::default();
    config.checks.max_chars_per_line = 8;
    let controller = Controller::with_config(config)?;

    let report = controller.run(&file_path)?;

    assert_eq!(report.in_category(DiagnosticCategory::ContentError).len(), 1);
    Ok(())
}

/// Test that an invalid configuration is rejected before any file access
#[test]
fn test_withConfig_withInvalidThresholds_shouldFail() {
    let mut config = Config::default();
    config.checks.max_lines_per_block = 0;

    assert!(Controller::with_config(config).is_err());
}
