use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::captions::model::{LanguagePreference, TrackCollections, TrackDescriptor};
use crate::errors::CaptionError;

/// Upstream collaborator that lists caption tracks and downloads them
///
/// Implementations must not download video media. Selection and parsing live
/// outside this trait so they can run against a scripted source.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// Resolve the automatic and manual track listings for a video URL
    ///
    /// # Arguments
    /// * `url` - Canonical video URL
    /// * `languages` - Languages the subtitle request is restricted to
    async fn resolve_tracks(
        &self,
        url: &str,
        languages: &LanguagePreference,
    ) -> Result<TrackCollections, CaptionError>;

    /// Download the raw payload of one track
    async fn fetch_payload(&self, track: &TrackDescriptor) -> Result<Bytes, CaptionError>;
}
