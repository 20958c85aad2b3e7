use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Caption tracks are keyed by codes such as `ko`, `en` or `en-US`; only the
/// primary subtag is checked against ISO 639.
/// Language code type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2/T code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part2T);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Primary subtag of a caption language code (`en-US` -> `en`)
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code).trim()
}

/// Validate a caption track language code by its primary subtag
pub fn validate_caption_language(code: &str) -> Result<()> {
    validate_language_code(primary_subtag(code))
        .map(|_| ())
        .map_err(|_| anyhow!("Invalid caption language code: {}", code))
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(normalized_code);
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name from a caption language code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(primary_subtag(code))?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
