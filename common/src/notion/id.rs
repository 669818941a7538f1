//! Canonical identifier form: 32 hex digits grouped 8-4-4-4-12.
//!
//! Users paste identifiers with or without hyphens, with stray whitespace, or
//! as a full page URL. Normalisation is best effort: input that cannot be
//! canonicalised is returned trimmed and the API gets to reject it.

use url::Url;

const HEX_LEN: usize = 32;

/// Normalises a database (container) identifier, which may be a page URL.
pub fn normalize_database_id(input: &str) -> String {
    let trimmed = input.trim();
    if let Ok(url) = Url::parse(trimmed) {
        let last_segment = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last());
        if let Some(id) = last_segment.and_then(|s| canonical(&s.replace('-', ""))) {
            return id;
        }
    }
    normalize_data_source_id(trimmed)
}

/// Normalises a data-source identifier. No URL handling.
pub fn normalize_data_source_id(input: &str) -> String {
    let trimmed = input.trim();
    let compact: String = trimmed
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    canonical(&compact).unwrap_or_else(|| trimmed.to_string())
}

/// Hyphenates the first 32 characters of `compact` when they are all hex.
fn canonical(compact: &str) -> Option<String> {
    let head: String = compact.chars().take(HEX_LEN).collect();
    if head.len() != HEX_LEN || !head.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!(
        "{}-{}-{}-{}-{}",
        &head[..8],
        &head[8..12],
        &head[12..16],
        &head[16..20],
        &head[20..]
    ))
}
