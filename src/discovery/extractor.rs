use tracing::debug;

use crate::models::{MediaSet, RegexPatterns};

/// Rule A: plain URLs, query string kept verbatim.
pub fn extract_raw_urls(text: &str, patterns: &RegexPatterns) -> Vec<String> {
    patterns.raw_media_regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Rule B: URLs escaped inside JSON strings, already normalized.
pub fn extract_escaped_urls(text: &str, patterns: &RegexPatterns) -> Vec<String> {
    patterns.escaped_media_regex
        .find_iter(text)
        .map(|m| normalize_escaped(m.as_str()))
        .collect()
}

pub fn normalize_escaped(url: &str) -> String {
    url.replace(r"\/", "/").replace(r"\.", ".")
}

pub fn extract_media_urls(text: &str, patterns: &RegexPatterns) -> MediaSet {
    let raw = extract_raw_urls(text, patterns);
    let escaped = extract_escaped_urls(text, patterns);
    debug!(raw = raw.len(), escaped = escaped.len(), "media url matches");

    let mut urls = MediaSet::new();
    urls.extend(raw);
    urls.extend(escaped);
    urls
}
