/*!
 * Caption extraction pipeline.
 *
 * - `model`: segments, track descriptors and language preference
 * - `json3`: structured-timing payload parser
 * - `selection`: ordered automatic-then-manual track selection
 * - `source`: the upstream collaborator trait
 * - `ytdlp`: yt-dlp backed source
 * - `mock`: scripted source for tests
 * - `extractor`: the best-effort entry point
 */

pub mod extractor;
pub mod json3;
pub mod mock;
pub mod model;
pub mod selection;
pub mod source;
pub mod ytdlp;

pub use extractor::CaptionExtractor;
pub use model::{CaptionSegment, LanguagePreference, TrackCollection, TrackCollections, TrackDescriptor, TrackKind};
pub use selection::SelectionOutcome;
pub use source::CaptionSource;
