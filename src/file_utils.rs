use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// @module: File access utilities

/// Extensions the checker recognizes as subtitle files
const SUBTITLE_EXTENSIONS: [&str; 2] = ["srt", "sbv"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Check whether a path carries a known subtitle extension (srt/sbv).
    ///
    /// Only a hint for the CLI; the actual format decision is made from the
    /// file's first block.
    pub fn has_subtitle_extension<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
    }
}
