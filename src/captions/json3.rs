use log::{debug, trace};
use serde::Deserialize;

use crate::captions::model::CaptionSegment;
use crate::errors::CaptionError;

// @module: Structured-timing (json3) caption payload parser

/// Extension tag of the structured-timing format
pub const STRUCTURED_FORMAT: &str = "json3";

/// Top-level json3 document
#[derive(Deserialize, Debug, Default)]
pub struct Json3Payload {
    #[serde(default)]
    pub events: Vec<Json3Event>,
}

/// A single timed event
#[derive(Deserialize, Debug)]
pub struct Json3Event {
    #[serde(rename = "tStartMs")]
    pub t_start_ms: Option<f64>,

    #[serde(rename = "dDurationMs")]
    pub d_duration_ms: Option<f64>,

    pub segs: Option<Vec<Json3Seg>>,
}

/// A text fragment of an event
#[derive(Deserialize, Debug)]
pub struct Json3Seg {
    #[serde(default)]
    pub utf8: Option<String>,
}

impl Json3Event {
    /// Concatenated, trimmed fragment text; `None` when the event has no fragment list
    pub fn text(&self) -> Option<String> {
        let segs = self.segs.as_ref()?;
        let raw: String = segs
            .iter()
            .filter_map(|s| s.utf8.as_deref())
            .collect();
        Some(raw.trim().to_string())
    }

    /// Converts the event into a segment, dropping events without usable text
    pub fn to_segment(&self) -> Option<CaptionSegment> {
        let text = self.text()?;
        if text.is_empty() {
            return None;
        }
        Some(CaptionSegment::from_millis(
            self.t_start_ms.unwrap_or(0.0),
            self.d_duration_ms.unwrap_or(0.0),
            text,
        ))
    }
}

impl Json3Payload {
    /// Flattens events into segments, keeping payload order
    pub fn into_segments(self) -> Vec<CaptionSegment> {
        let total = self.events.len();
        let segments: Vec<CaptionSegment> = self
            .events
            .iter()
            .filter_map(Json3Event::to_segment)
            .collect();
        trace!("json3: {} events, {} kept", total, segments.len());
        segments
    }
}

/// Parse a raw json3 payload into ordered caption segments
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<CaptionSegment>, CaptionError> {
    let payload: Json3Payload = serde_json::from_slice(bytes)
        .map_err(|e| CaptionError::payload_parse(e.to_string()))?;
    let segments = payload.into_segments();
    debug!("Parsed {} caption segments", segments.len());
    Ok(segments)
}
