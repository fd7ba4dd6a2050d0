// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod subtitle_processor;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a subtitle file against format, timing and readability rules (default command)
    Check(CheckArgs),

    /// Generate shell completions for subcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Subtitle file to check (.srt or .sbv)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Maximum characters per line, in full-width units
    #[arg(long)]
    max_chars_per_line: Option<usize>,

    /// Maximum text lines per subtitle block
    #[arg(long)]
    max_lines_per_block: Option<usize>,

    /// Minimum display duration in milliseconds
    #[arg(long)]
    min_duration_ms: Option<u64>,

    /// Maximum reading speed in characters per second
    #[arg(long)]
    max_chars_per_second: Option<f64>,

    /// Skip the line count and line width checks
    #[arg(long)]
    no_layout_check: bool,

    /// Skip the reading speed check
    #[arg(long)]
    no_speed_check: bool,
}

/// subcheck - Subtitle File Checker
///
/// Validates SRT and SBV subtitle files against structural, timing and
/// readability rules before publication.
#[derive(Parser, Debug)]
#[command(name = "subcheck")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle file checker for SRT and SBV")]
#[command(long_about = "subcheck validates subtitle files before captions are published.

EXAMPLES:
    subcheck captions.srt                       # Check using default config
    subcheck --max-chars-per-line 20 caps.sbv   # Tighter line width limit
    subcheck --no-speed-check captions.srt      # Skip the reading speed rule
    subcheck -l debug captions.srt              # Check with debug logging
    subcheck completions bash > subcheck.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

CHECKS:
    format    - sequence numbers, timestamp lines, missing text
    timing    - interval ordering, minimum duration, overlaps
    content   - line count, line width, reading speed (optional)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file to check (.srt or .sbv)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Maximum characters per line, in full-width units
    #[arg(long)]
    max_chars_per_line: Option<usize>,

    /// Maximum text lines per subtitle block
    #[arg(long)]
    max_lines_per_block: Option<usize>,

    /// Minimum display duration in milliseconds
    #[arg(long)]
    min_duration_ms: Option<u64>,

    /// Maximum reading speed in characters per second
    #[arg(long)]
    max_chars_per_second: Option<f64>,

    /// Skip the line count and line width checks
    #[arg(long)]
    no_layout_check: bool,

    /// Skip the reading speed check
    #[arg(long)]
    no_speed_check: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcheck", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Check(args)) => run_check(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let check_args = CheckArgs {
                input_path,
                config_path: cli.config_path,
                log_level: cli.log_level,
                max_chars_per_line: cli.max_chars_per_line,
                max_lines_per_block: cli.max_lines_per_block,
                min_duration_ms: cli.min_duration_ms,
                max_chars_per_second: cli.max_chars_per_second,
                no_layout_check: cli.no_layout_check,
                no_speed_check: cli.no_speed_check,
            };
            run_check(check_args)
        }
    }
}

fn run_check(options: CheckArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(max_chars) = options.max_chars_per_line {
        config.checks.max_chars_per_line = max_chars;
    }

    if let Some(max_lines) = options.max_lines_per_block {
        config.checks.max_lines_per_block = max_lines;
    }

    if let Some(min_duration) = options.min_duration_ms {
        config.checks.min_duration_ms = min_duration;
    }

    if let Some(max_cps) = options.max_chars_per_second {
        config.checks.max_chars_per_second = max_cps;
    }

    if options.no_layout_check {
        config.checks.check_content_layout = false;
    }

    if options.no_speed_check {
        config.checks.check_reading_speed = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller; configuration is validated here
    let controller = Controller::with_config(config)?;

    if !options.input_path.is_file() {
        return Err(anyhow!(
            "Input path does not exist or is not a file: {:?}",
            options.input_path
        ));
    }

    controller.run(&options.input_path)?;

    Ok(())
}
