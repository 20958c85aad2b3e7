/*!
 * Tests for json3 payload parsing
 */

use caption_extractor::captions::json3::parse_payload;
use caption_extractor::errors::CaptionError;
use crate::common;

/// Millisecond offsets become seconds
#[test]
fn test_parse_payload_withMillisecondTiming_shouldConvertToSeconds() {
    let payload = common::json3_payload(&[(2500, 1200, "안녕하세요")]);
    let segments = parse_payload(payload.as_bytes()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, 2.5);
    assert_eq!(segments[0].duration, 1.2);
    assert_eq!(segments[0].text, "안녕하세요");
}

/// Fragments are concatenated in order and the result is trimmed
#[test]
fn test_parse_payload_withMultipleFragments_shouldConcatenateAndTrim() {
    let payload = r#"{"events": [
        {"tStartMs": 0, "dDurationMs": 3000, "segs": [{"utf8": "  hello"}, {"utf8": " "}, {"utf8": "world \n"}]}
    ]}"#;
    let segments = parse_payload(payload.as_bytes()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "hello world");
}

/// Blank events are dropped, order of the remaining ones is kept
#[test]
fn test_parse_payload_withBlankAndTextEvents_shouldKeepOnlyNonBlank() {
    let payload = common::json3_payload(&[
        (0, 1000, "first"),
        (1000, 500, "   "),
        (1500, 800, "second"),
        (2300, 100, "\n"),
        (2400, 900, "third"),
    ]);
    let segments = parse_payload(payload.as_bytes()).unwrap();

    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(segments[1].start, 1.5);
}

/// Events without a segs list carry no text and are skipped
#[test]
fn test_parse_payload_withWindowEventsWithoutSegs_shouldSkipThem() {
    let payload = r#"{"events": [
        {"tStartMs": 0, "dDurationMs": 90000, "id": 1, "wpWinPosId": 1},
        {"tStartMs": 160, "dDurationMs": 2000, "segs": [{"utf8": "caption"}]}
    ]}"#;
    let segments = parse_payload(payload.as_bytes()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, 0.16);
}

/// Missing timing fields default to zero
#[test]
fn test_parse_payload_withMissingTiming_shouldDefaultToZero() {
    let payload = r#"{"events": [{"segs": [{"utf8": "no timing"}]}]}"#;
    let segments = parse_payload(payload.as_bytes()).unwrap();

    assert_eq!(segments[0].start, 0.0);
    assert_eq!(segments[0].duration, 0.0);
}

/// Fragments without utf8 contribute nothing
#[test]
fn test_parse_payload_withFragmentMissingUtf8_shouldTreatAsEmpty() {
    let payload = r#"{"events": [{"tStartMs": 10, "dDurationMs": 20, "segs": [{"acAsrConf": 0}, {"utf8": "kept"}]}]}"#;
    let segments = parse_payload(payload.as_bytes()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "kept");
}

/// A payload without events is valid and empty
#[test]
fn test_parse_payload_withNoEvents_shouldReturnEmpty() {
    let segments = parse_payload(br#"{"wireMagic": "pb3"}"#).unwrap();
    assert!(segments.is_empty());
}

/// Invalid JSON is a parse error
#[test]
fn test_parse_payload_withInvalidJson_shouldReturnParseError() {
    let result = parse_payload(b"WEBVTT\n\n00:00.000 --> 00:01.000\nhi");
    assert!(matches!(result, Err(CaptionError::Parse { .. })));
}
