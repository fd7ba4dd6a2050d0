/*!
 * Common test utilities for the subcheck test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a well-formed SRT file for testing
pub fn create_test_srt(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a well-formed SBV file for testing
pub fn create_test_sbv(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"0:00:01.000,0:00:04.000
This is a test subtitle.

0:00:05.000,0:00:09.000
It contains multiple entries.
"#;
    create_test_file(dir, filename, content)
}
