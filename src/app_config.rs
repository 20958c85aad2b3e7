use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::captions::LanguagePreference;
use crate::errors::AppError;
use crate::output::OutputFormat;
use crate::video_id::ID_PLACEHOLDER;

/// Application configuration module
/// This module handles loading and validating the extractor settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Caption languages in priority order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Canonical video URL template, `{id}` is replaced by the video identifier
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Path or name of the yt-dlp executable
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,

    /// Upstream timeout in seconds; unset means transport defaults
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Output format written to stdout
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_languages() -> Vec<String> {
    vec!["ko".to_string(), "en".to_string()]
}

fn default_url_template() -> String {
    "https://www.youtube.com/shorts/{id}".to_string()
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

impl Config {
    /// Load the configuration from a JSON file
    ///
    /// Fields absent from the file take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::File(format!("Failed to open config file {}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {}: {}", path.display(), e)))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let preference = self.language_preference();
        if preference.is_empty() {
            return Err(anyhow!("At least one caption language is required"));
        }

        for lang in preference.iter() {
            crate::language_utils::validate_caption_language(lang)?;
        }

        if !self.url_template.contains(ID_PLACEHOLDER) {
            return Err(anyhow!("URL template must contain the {} placeholder: {}", ID_PLACEHOLDER, self.url_template));
        }

        if self.ytdlp_path.trim().is_empty() {
            return Err(anyhow!("yt-dlp path must not be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(anyhow!("Timeout must be greater than zero when set"));
        }

        Ok(())
    }

    /// Ordered language preference built from the configured codes
    pub fn language_preference(&self) -> LanguagePreference {
        LanguagePreference::new(&self.languages)
    }

    /// Configured upstream timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            languages: default_languages(),
            url_template: default_url_template(),
            ytdlp_path: default_ytdlp_path(),
            timeout_secs: None,
            format: OutputFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}
