// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};
use std::io::Write;

use caption_extractor::app_config::{self, Config};
use caption_extractor::language_utils;
use caption_extractor::output::{self, OutputFormat};
use caption_extractor::CaptionExtractor;

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

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Json,
    Srt,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Srt => OutputFormat::Srt,
        }
    }
}

/// extract-captions - print the captions of a video as JSON
///
/// Resolves the caption tracks of a video, picks one by language and authoring
/// priority, and prints the timed segments to standard output.
#[derive(Parser, Debug)]
#[command(name = "extract-captions")]
#[command(version)]
#[command(about = "Extract timed captions of a video as JSON")]
#[command(long_about = "Extracts the captions of a video and prints them as a JSON array of
{start, duration, text} objects on standard output. Diagnostics go to standard error.

Automatic captions are preferred; manual captions are used only when the automatic
track yields nothing. Languages are tried in the configured order (default: ko, en).
Extraction failures are logged and produce an empty array.

EXAMPLES:
    extract-captions 39KRfXSrKxo
    extract-captions https://www.youtube.com/shorts/39KRfXSrKxo
    extract-captions -FyjEnoIgTM
    extract-captions --config conf.json 39KRfXSrKxo
    extract-captions --format srt 39KRfXSrKxo > captions.srt
    extract-captions --completions bash > extract-captions.bash")]
struct CommandLineOptions {
    /// Video identifier (or video URL); identifiers may start with '-'
    #[arg(value_name = "VIDEO_ID", required_unless_present = "completions", allow_hyphen_values = true)]
    video_id: Option<String>,

    /// Configuration file path; built-in defaults apply when omitted
    #[arg(short, long, value_name = "PATH")]
    config_path: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

// @struct: Stderr logger
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

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            // stdout carries only the caption output
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "extract-captions", &mut std::io::stdout());
        return Ok(());
    }

    let video = cli.video_id.clone()
        .ok_or_else(|| anyhow!("VIDEO_ID is required"))?;

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    for lang in config.language_preference().iter() {
        if let Ok(name) = language_utils::get_language_name(lang) {
            debug!("Caption language preference: {} ({})", lang, name);
        }
    }

    let segments = match CaptionExtractor::from_config(&config) {
        Ok(extractor) => extractor.extract(&video).await,
        Err(e) => {
            error!("Failed to set up caption source: {}", e);
            Vec::new()
        }
    };

    let rendered = output::render(&segments, config.format)
        .context("Failed to render captions")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    stdout.flush()?;

    Ok(())
}

// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = match &cli.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(format) = &cli.format {
        config.format = format.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}
