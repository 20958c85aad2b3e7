/*!
 * Tests for caption output rendering
 */

use caption_extractor::captions::CaptionSegment;
use caption_extractor::output::{format_timestamp, render, to_json, to_srt, OutputFormat};

fn sample_segments() -> Vec<CaptionSegment> {
    vec![
        CaptionSegment::from_millis(2500.0, 1200.0, "안녕하세요"),
        CaptionSegment::from_millis(3700.0, 2000.0, "Hello there"),
    ]
}

/// JSON output keeps non-ASCII text unescaped and uses the documented field names
#[test]
fn test_to_json_withKoreanText_shouldNotEscapeNonAscii() {
    let json = to_json(&sample_segments()).unwrap();

    assert!(json.contains("안녕하세요"));
    assert!(!json.contains("\\u"));
    assert!(json.starts_with("[\n  {"));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["start"], 2.5);
    assert_eq!(parsed[0]["duration"], 1.2);
    assert_eq!(parsed[1]["text"], "Hello there");
}

/// An empty result is an empty JSON array
#[test]
fn test_to_json_withNoSegments_shouldPrintEmptyArray() {
    assert_eq!(to_json(&[]).unwrap(), "[]");
}

/// SRT output numbers cues and formats their time range
#[test]
fn test_to_srt_withSegments_shouldWriteNumberedCues() {
    let srt = to_srt(&sample_segments()).unwrap();

    assert!(srt.starts_with("1\n00:00:02,500 --> 00:00:03,700\n안녕하세요\n\n"));
    assert!(srt.contains("2\n00:00:03,700 --> 00:00:05,700\nHello there\n"));
}

#[test]
fn test_render_withEachFormat_shouldDispatch() {
    let segments = sample_segments();
    assert!(render(&segments, OutputFormat::Json).unwrap().starts_with('['));
    assert!(render(&segments, OutputFormat::Srt).unwrap().starts_with("1\n"));
}

#[test]
fn test_format_timestamp_withHours_shouldPadAllFields() {
    assert_eq!(format_timestamp(5_025_678), "01:23:45,678");
    assert_eq!(format_timestamp(0), "00:00:00,000");
}
