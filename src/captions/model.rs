use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// @module: Caption data model

/// One timed line of caption text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Start offset in seconds
    pub start: f64,

    /// Display duration in seconds
    pub duration: f64,

    /// Trimmed, non-empty caption text
    pub text: String,
}

impl CaptionSegment {
    /// Creates a segment from millisecond offsets
    pub fn from_millis(start_ms: f64, duration_ms: f64, text: impl Into<String>) -> Self {
        Self {
            start: start_ms / 1000.0,
            duration: duration_ms / 1000.0,
            text: text.into(),
        }
    }

    /// End offset in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A single downloadable caption track as listed by the metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Format / file extension (e.g. "json3", "vtt", "srv1")
    #[serde(default)]
    pub ext: String,

    /// Fetch URL for the raw payload
    #[serde(default)]
    pub url: String,

    /// Human readable track name, if the provider gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TrackDescriptor {
    pub fn new(ext: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            ext: ext.into(),
            url: url.into(),
            name: None,
        }
    }
}

/// Language code to the ordered track list for that language
pub type TrackCollection = HashMap<String, Vec<TrackDescriptor>>;

/// How a caption track was authored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Generated by speech recognition
    Automatic,
    /// Uploaded by the video owner
    Manual,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "automatic"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Automatic and manual track listings of one video
///
/// Field names follow the metadata document emitted by yt-dlp, where either
/// object may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrackCollections {
    #[serde(rename = "automatic_captions", default, deserialize_with = "null_as_empty")]
    pub automatic: TrackCollection,

    #[serde(rename = "subtitles", default, deserialize_with = "null_as_empty")]
    pub manual: TrackCollection,
}

impl TrackCollections {
    /// Returns the collection for the given kind
    pub fn get(&self, kind: TrackKind) -> &TrackCollection {
        match kind {
            TrackKind::Automatic => &self.automatic,
            TrackKind::Manual => &self.manual,
        }
    }

    /// Adds a track to one of the collections, keeping insertion order per language
    pub fn push(&mut self, kind: TrackKind, language: impl Into<String>, track: TrackDescriptor) {
        let collection = match kind {
            TrackKind::Automatic => &mut self.automatic,
            TrackKind::Manual => &mut self.manual,
        };
        collection.entry(language.into()).or_default().push(track);
    }

    pub fn is_empty(&self) -> bool {
        self.automatic.is_empty() && self.manual.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<TrackCollection, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TrackCollection>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered list of acceptable caption languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePreference {
    languages: Vec<String>,
}

impl LanguagePreference {
    /// Builds a preference list, dropping blanks and repeated codes
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for lang in languages {
            let lang = lang.as_ref().trim();
            if !lang.is_empty() && !ordered.iter().any(|l| l == lang) {
                ordered.push(lang.to_string());
            }
        }
        Self { languages: ordered }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Comma separated form, as passed to `--sub-langs`
    pub fn joined(&self) -> String {
        self.languages.join(",")
    }
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::new(["ko", "en"])
    }
}
