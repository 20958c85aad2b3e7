/*!
 * Scripted caption source for testing.
 *
 * `MockSource` serves a fixed set of track collections and payloads and counts
 * every call so tests can assert which tracks were actually downloaded.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::captions::model::{
    LanguagePreference, TrackCollections, TrackDescriptor, TrackKind,
};
use crate::captions::source::CaptionSource;
use crate::errors::CaptionError;

/// Failure mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockFailure {
    /// Every call succeeds
    None,
    /// Metadata resolution fails
    Metadata,
    /// Every payload download fails
    Payload,
}

/// Scripted caption source
///
/// Clones share their call counters, so a test can keep one handle and move
/// another into an extractor.
#[derive(Debug, Clone)]
pub struct MockSource {
    collections: TrackCollections,
    payloads: HashMap<String, Bytes>,
    failure: MockFailure,
    resolve_count: Arc<AtomicUsize>,
    fetched: Arc<Mutex<Vec<String>>>,
    last_languages: Arc<Mutex<Option<LanguagePreference>>>,
}

impl MockSource {
    /// Create a source that lists no tracks at all
    pub fn new() -> Self {
        Self {
            collections: TrackCollections::default(),
            payloads: HashMap::new(),
            failure: MockFailure::None,
            resolve_count: Arc::new(AtomicUsize::new(0)),
            fetched: Arc::new(Mutex::new(Vec::new())),
            last_languages: Arc::new(Mutex::new(None)),
        }
    }

    /// List a track and register the payload served for it
    pub fn with_track(
        mut self,
        kind: TrackKind,
        language: &str,
        ext: &str,
        url: &str,
        payload: impl Into<Bytes>,
    ) -> Self {
        self.collections.push(kind, language, TrackDescriptor::new(ext, url));
        self.payloads.insert(url.to_string(), payload.into());
        self
    }

    /// List a track without a payload; fetching it fails
    pub fn with_listing(mut self, kind: TrackKind, language: &str, ext: &str, url: &str) -> Self {
        self.collections.push(kind, language, TrackDescriptor::new(ext, url));
        self
    }

    /// Make the source fail
    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = failure;
        self
    }

    /// Number of metadata resolutions performed
    pub fn resolve_count(&self) -> usize {
        self.resolve_count.load(Ordering::SeqCst)
    }

    /// URLs downloaded so far, in call order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Number of times a given URL was downloaded
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetched_urls().iter().filter(|u| *u == url).count()
    }

    /// Languages passed with the most recent metadata request
    pub fn last_languages(&self) -> Option<LanguagePreference> {
        self.last_languages.lock().ok().and_then(|l| l.clone())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionSource for MockSource {
    async fn resolve_tracks(
        &self,
        url: &str,
        languages: &LanguagePreference,
    ) -> Result<TrackCollections, CaptionError> {
        self.resolve_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_languages.lock() {
            *last = Some(languages.clone());
        }

        if self.failure == MockFailure::Metadata {
            return Err(CaptionError::MetadataFetch(format!("mock metadata failure for {}", url)));
        }
        Ok(self.collections.clone())
    }

    async fn fetch_payload(&self, track: &TrackDescriptor) -> Result<Bytes, CaptionError> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(track.url.clone());
        }

        if self.failure == MockFailure::Payload {
            return Err(CaptionError::PayloadFetch(format!("mock payload failure for {}", track.url)));
        }
        self.payloads
            .get(&track.url)
            .cloned()
            .ok_or_else(|| CaptionError::HttpStatus {
                status_code: 404,
                message: format!("no payload scripted for {}", track.url),
            })
    }
}
