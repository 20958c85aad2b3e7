/*!
 * # caption-extractor
 *
 * A Rust library and command-line helper that fetches the caption track of a
 * video and flattens it into timed text segments.
 *
 * ## Features
 *
 * - Resolve automatic and manual caption tracks through yt-dlp
 * - Prefer Korean, then English (configurable)
 * - Automatic captions first; manual captions only when the automatic track gave nothing
 * - Parse structured-timing (json3) payloads into `{start, duration, text}` segments
 * - Best-effort contract: failures are logged and yield an empty list
 * - JSON (default) or SRT output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `captions`: Extraction pipeline:
 *   - `captions::model`: Data model
 *   - `captions::json3`: Payload parsing
 *   - `captions::selection`: Track selection policy
 *   - `captions::source`: Upstream collaborator trait
 *   - `captions::ytdlp`: yt-dlp backed source
 *   - `captions::mock`: Scripted source for tests
 *   - `captions::extractor`: Best-effort entry point
 * - `video_id`: Video identifier parsing and canonical URLs
 * - `output`: JSON / SRT rendering
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod captions;
pub mod errors;
pub mod language_utils;
pub mod output;
pub mod video_id;

// Re-export main types for easier usage
pub use app_config::Config;
pub use captions::{CaptionExtractor, CaptionSegment, CaptionSource, SelectionOutcome};
pub use errors::{AppError, CaptionError};
pub use output::OutputFormat;
