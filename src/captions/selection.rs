use log::{debug, info};

use crate::captions::json3;
use crate::captions::model::{
    CaptionSegment, LanguagePreference, TrackCollection, TrackCollections, TrackDescriptor, TrackKind,
};
use crate::captions::source::CaptionSource;
use crate::errors::CaptionError;

// @module: Track selection policy

/// Collections in the order they are consulted
pub const SELECTION_ORDER: [TrackKind; 2] = [TrackKind::Automatic, TrackKind::Manual];

/// Result of running the selection policy
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// A track produced at least one segment
    Found {
        kind: TrackKind,
        language: String,
        segments: Vec<CaptionSegment>,
    },
    /// No collection produced any segment
    Empty,
}

impl SelectionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn into_segments(self) -> Vec<CaptionSegment> {
        match self {
            Self::Found { segments, .. } => segments,
            Self::Empty => Vec::new(),
        }
    }
}

/// Pick the track to download from one collection
///
/// The first preferred language present in the collection wins. Within that
/// language only the first json3 entry is taken; if there is none the
/// collection yields nothing and later languages are not tried.
pub fn pick_track<'a>(
    collection: &'a TrackCollection,
    preference: &'a LanguagePreference,
) -> Option<(&'a str, &'a TrackDescriptor)> {
    let (language, tracks) = preference
        .iter()
        .find_map(|lang| collection.get(lang).map(|tracks| (lang, tracks)))?;

    match tracks.iter().find(|t| t.ext == json3::STRUCTURED_FORMAT) {
        Some(track) => Some((language, track)),
        None => {
            debug!("No {} track for language '{}', skipping collection", json3::STRUCTURED_FORMAT, language);
            None
        }
    }
}

/// Scan one collection and download/parse its chosen track
pub async fn scan_collection(
    source: &dyn CaptionSource,
    collection: &TrackCollection,
    preference: &LanguagePreference,
) -> Result<Option<(String, Vec<CaptionSegment>)>, CaptionError> {
    let Some((language, track)) = pick_track(collection, preference) else {
        return Ok(None);
    };

    let payload = source.fetch_payload(track).await?;
    let segments = json3::parse_payload(&payload)?;

    Ok(Some((language.to_string(), segments)))
}

/// Run the ordered selection policy over both collections
///
/// Manual tracks are consulted only when the automatic step produced zero
/// usable segments, including the case where its track held only blank events.
pub async fn select_captions(
    source: &dyn CaptionSource,
    collections: &TrackCollections,
    preference: &LanguagePreference,
) -> Result<SelectionOutcome, CaptionError> {
    for kind in SELECTION_ORDER {
        let collection = collections.get(kind);
        if collection.is_empty() {
            debug!("No {} caption tracks listed", kind);
            continue;
        }

        match scan_collection(source, collection, preference).await? {
            Some((language, segments)) if !segments.is_empty() => {
                info!("Using {} captions in '{}' ({} segments)", kind, language, segments.len());
                return Ok(SelectionOutcome::Found { kind, language, segments });
            }
            Some((language, _)) => {
                debug!("{} track in '{}' had no usable text", kind, language);
            }
            None => {}
        }
    }

    Ok(SelectionOutcome::Empty)
}
