use log::{debug, error, info, warn};

use crate::app_config::Config;
use crate::captions::model::{CaptionSegment, LanguagePreference};
use crate::captions::selection::{self, SelectionOutcome};
use crate::captions::source::CaptionSource;
use crate::captions::ytdlp::YtDlpSource;
use crate::errors::CaptionError;
use crate::video_id;

// @module: Best-effort caption extraction entry point

/// Resolves, selects and parses the captions of one video
#[derive(Debug)]
pub struct CaptionExtractor {
    // @field: Upstream metadata/payload collaborator
    source: Box<dyn CaptionSource>,

    // @field: Ordered acceptable languages
    preference: LanguagePreference,

    // @field: Canonical URL template with an `{id}` placeholder
    url_template: String,
}

impl CaptionExtractor {
    /// Create an extractor over any caption source
    pub fn new(
        source: Box<dyn CaptionSource>,
        preference: LanguagePreference,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            source,
            preference,
            url_template: url_template.into(),
        }
    }

    /// Create an extractor backed by yt-dlp using the given configuration
    pub fn from_config(config: &Config) -> Result<Self, CaptionError> {
        let source = YtDlpSource::new(config.ytdlp_path.clone(), config.timeout())?;
        Ok(Self::new(Box::new(source), config.language_preference(), config.url_template.clone()))
    }

    /// Extract captions, returning an empty list on any failure
    ///
    /// Failures are logged at error level and never reach the caller, so an empty
    /// result means either "no captions" or "extraction failed".
    pub async fn extract(&self, video: &str) -> Vec<CaptionSegment> {
        match self.try_extract(video).await {
            Ok(outcome) => outcome.into_segments(),
            Err(e) => {
                error!("Caption extraction failed for '{}': {}", video, e);
                Vec::new()
            }
        }
    }

    /// Extract captions, surfacing pipeline errors
    pub async fn try_extract(&self, video: &str) -> Result<SelectionOutcome, CaptionError> {
        let id = video_id::parse_video_id(video)?;
        let url = video_id::canonical_url(&self.url_template, &id);
        debug!("Resolving caption tracks for {}", url);

        let collections = self.source.resolve_tracks(&url, &self.preference).await?;
        if collections.is_empty() {
            info!("No caption tracks listed for {}", id);
            return Ok(SelectionOutcome::Empty);
        }

        let outcome = selection::select_captions(self.source.as_ref(), &collections, &self.preference).await?;
        if !outcome.is_found() {
            warn!("No usable captions in {} for {}", self.preference.joined(), id);
        }
        Ok(outcome)
    }
}
