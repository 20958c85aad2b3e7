/*!
 * Tests for error types and conversions
 */

use caption_extractor::errors::{AppError, CaptionError};

#[test]
fn test_captionError_httpStatus_shouldDisplayStatusAndMessage() {
    let error = CaptionError::HttpStatus {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_captionError_toolLaunch_shouldNameProgram() {
    let error = CaptionError::ToolLaunch {
        program: "yt-dlp".to_string(),
        message: "No such file or directory".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("yt-dlp"));
    assert!(display.contains("No such file or directory"));
}

#[test]
fn test_captionError_parseHelpers_shouldDescribeSubject() {
    assert!(CaptionError::metadata_parse("eof").to_string().contains("metadata document"));
    assert!(CaptionError::payload_parse("eof").to_string().contains("caption payload"));
}

#[test]
fn test_captionError_timeout_shouldDisplaySeconds() {
    let error = CaptionError::Timeout { operation: "metadata fetch", secs: 30 };
    assert_eq!(error.to_string(), "metadata fetch timed out after 30 seconds");
}

#[test]
fn test_captionError_clientSetup_shouldDescribeHttpClient() {
    let error = CaptionError::ClientSetup("no TLS backend".to_string());
    assert_eq!(error.to_string(), "Failed to set up HTTP client: no TLS backend");
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("Something went wrong").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_appError_fromJsonError_shouldWrapAsRenderError() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = json_error.into();
    assert!(matches!(app_error, AppError::Render(_)));
    assert!(app_error.to_string().starts_with("Render error"));
}
