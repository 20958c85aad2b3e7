/*!
 * Tests for application configuration functionality
 */

use std::time::Duration;
use caption_extractor::app_config::{Config, LogLevel};
use caption_extractor::captions::LanguagePreference;
use caption_extractor::errors::AppError;
use caption_extractor::output::OutputFormat;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.languages, vec!["ko", "en"]);
    assert_eq!(config.url_template, "https://www.youtube.com/shorts/{id}");
    assert_eq!(config.ytdlp_path, "yt-dlp");
    assert_eq!(config.timeout_secs, None);
    assert_eq!(config.timeout(), None);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.languages = vec![];
    assert!(config.validate().is_err());

    config.languages = vec!["  ".to_string()];
    assert!(config.validate().is_err());

    config.languages = vec!["xx".to_string()];
    assert!(config.validate().is_err());

    config.languages = vec!["en-US".to_string(), "ja".to_string()];
    assert!(config.validate().is_ok());

    config.url_template = "https://www.youtube.com/watch".to_string();
    assert!(config.validate().is_err());
    config.url_template = "https://www.youtube.com/watch?v={id}".to_string();

    config.timeout_secs = Some(0);
    assert!(config.validate().is_err());
    config.timeout_secs = Some(30);
    assert!(config.validate().is_ok());
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
}

/// Repeated languages collapse into one preference entry
#[test]
fn test_language_preference_withDuplicates_shouldKeepFirstOccurrence() {
    let mut config = Config::default();
    config.languages = vec!["en".to_string(), "ko".to_string(), "en".to_string()];

    assert_eq!(config.language_preference(), LanguagePreference::new(["en", "ko"]));
}

/// Partial files fill the rest from defaults
#[test]
fn test_from_file_withPartialFile_shouldApplyDefaults() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r#"{"languages": ["en"], "format": "srt", "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.languages, vec!["en"]);
    assert_eq!(config.format, OutputFormat::Srt);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.ytdlp_path, "yt-dlp");
    Ok(())
}

/// An explicitly named file that does not exist is a file error
#[test]
fn test_from_file_withMissingFile_shouldReturnFileError() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("absent.json");

    let result = Config::from_file(&path);

    assert!(matches!(result, Err(AppError::File(_))));
    assert!(!path.exists());
    Ok(())
}

/// Malformed files are configuration errors
#[test]
fn test_from_file_withMalformedFile_shouldReturnConfigError() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "conf.json", "{ languages: ")?;

    let result = Config::from_file(&path);

    assert!(matches!(result, Err(AppError::Config(_))));
    Ok(())
}

/// Log levels map onto log crate filters
#[test]
fn test_log_level_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
