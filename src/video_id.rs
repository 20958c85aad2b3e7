use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::errors::CaptionError;

// @module: Video identifier handling

// @const: Characters allowed in a video identifier
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap()
});

/// Placeholder replaced by the video identifier in URL templates
pub const ID_PLACEHOLDER: &str = "{id}";

/// Check whether a host belongs to the video platform
pub fn is_video_host(host: &str) -> bool {
    let h = host.to_ascii_lowercase();
    h == "youtube.com"
        || h == "youtu.be"
        || h.ends_with(".youtube.com")
}

/// Check whether a string is a bare video identifier
pub fn is_bare_id(input: &str) -> bool {
    VIDEO_ID_REGEX.is_match(input)
}

/// Turn a bare identifier or a video URL into a video identifier
///
/// Accepted URL shapes: `watch?v=ID`, `youtu.be/ID`, `/shorts/ID`, `/embed/ID`
/// and `/live/ID`.
pub fn parse_video_id(input: &str) -> Result<String, CaptionError> {
    let input = input.trim();
    if is_bare_id(input) {
        return Ok(input.to_string());
    }

    let url = Url::parse(input)
        .map_err(|_| CaptionError::InvalidVideoId(input.to_string()))?;
    id_from_url(&url).ok_or_else(|| CaptionError::InvalidVideoId(input.to_string()))
}

fn id_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !is_video_host(host) {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let candidate = if host.eq_ignore_ascii_case("youtu.be") {
        segments.next().map(str::to_string)
    } else {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            Some("shorts") | Some("embed") | Some("live") => segments.next().map(str::to_string),
            _ => None,
        }
    };

    candidate
        .map(|id| id.trim().to_string())
        .filter(|id| is_bare_id(id))
}

/// Build the canonical source URL for a video identifier
pub fn canonical_url(template: &str, video_id: &str) -> String {
    template.replace(ID_PLACEHOLDER, video_id)
}
