use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::validation::{CheckReport, ValidationService};

// @module: Application controller for subtitle checking

/// Main application controller for subtitle validation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self { config })
    }

    /// Run a full check over one subtitle file and print the report.
    ///
    /// File access problems and an unrecognizable format end the run with an
    /// error; rule violations are findings, printed and returned.
    pub fn run<P: AsRef<Path>>(&self, input_file: P) -> Result<CheckReport> {
        let input_file = input_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        if !FileManager::has_subtitle_extension(input_file) {
            warn!(
                "File extension is not .srt or .sbv, checking anyway: {:?}",
                input_file
            );
        }

        info!("Checking subtitle file: {:?}", input_file);

        let content = FileManager::read_to_string(input_file)
            .with_context(|| format!("Could not open subtitle file: {:?}", input_file))?;

        let report = self.check_content(&content)?;
        self.print_report(&report);

        Ok(report)
    }

    /// Run the validation engine over already-loaded content
    pub fn check_content(&self, content: &str) -> Result<CheckReport> {
        let service = ValidationService::with_config(self.config.checks.clone());

        let report = service
            .check_content(content)
            .context("Subtitle check aborted")?;

        debug!(
            "Run finished with {} diagnostic(s) over {} bytes of input",
            report.total(),
            content.len()
        );

        Ok(report)
    }

    /// Print the completion banner, category summary and grouped diagnostics
    fn print_report(&self, report: &CheckReport) {
        if report.is_clean() {
            println!("{}.", report.summary());
            return;
        }

        println!("{}.", report.summary());
        println!();
        println!("--- Summary ---");
        for (category, count) in report.category_counts() {
            println!("- {}: {}", category, count);
        }
        println!("---------------");

        for category in crate::validation::DiagnosticCategory::ALL {
            let diagnostics = report.in_category(category);
            if diagnostics.is_empty() {
                continue;
            }

            println!();
            println!("--- {} ({}) ---", category, diagnostics.len());
            for diagnostic in diagnostics {
                println!("{}", diagnostic);
            }
        }
    }
}
