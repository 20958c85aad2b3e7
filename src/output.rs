use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::captions::CaptionSegment;
use crate::errors::AppError;

// @module: Rendering of extracted captions for stdout

/// Output format of the extracted captions
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of `{start, duration, text}`
    #[default]
    Json,
    /// Numbered SRT cues
    Srt,
}

/// Render segments in the requested format
pub fn render(segments: &[CaptionSegment], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => to_json(segments),
        OutputFormat::Srt => to_srt(segments),
    }
}

/// JSON array with two-space indentation; non-ASCII text is written as-is
pub fn to_json(segments: &[CaptionSegment]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(segments)?)
}

/// SRT document, one cue per segment
pub fn to_srt(segments: &[CaptionSegment]) -> Result<String, AppError> {
    let mut output = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let start_ms = seconds_to_millis(segment.start);
        let end_ms = seconds_to_millis(segment.end());
        writeln!(&mut output, "{}", i + 1).map_err(|e| AppError::Render(e.to_string()))?;
        writeln!(&mut output, "{} --> {}", format_timestamp(start_ms), format_timestamp(end_ms))
            .map_err(|e| AppError::Render(e.to_string()))?;
        writeln!(&mut output, "{}\n", segment.text).map_err(|e| AppError::Render(e.to_string()))?;
    }
    Ok(output)
}

fn seconds_to_millis(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
