use regex::Regex;
use std::collections::HashSet;

use crate::config::{MEDIA_EXTENSIONS, MEDIA_HOST};


/// Unique media URLs collected from one document.
#[derive(Debug, Default)]
pub struct MediaSet {
    urls: HashSet<String>,
}

impl MediaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the URL was already present.
    pub fn insert(&mut self, url: String) -> bool {
        self.urls.insert(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_sorted(self) -> Vec<String> {
        let mut urls: Vec<String> = self.urls.into_iter().collect();
        urls.sort();
        urls
    }
}

impl Extend<String> for MediaSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.urls.extend(iter);
    }
}

pub struct RegexPatterns {
    /// `https://<host>/media/<file>.<ext>[?query]`
    pub raw_media_regex: Regex,
    /// Same URL inside a JSON string: `https:\/\/<host>\/media\/<file>.<ext>`
    pub escaped_media_regex: Regex,
}

impl RegexPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        let extensions = MEDIA_EXTENSIONS.join("|");

        let raw = format!(
            r#"(?i)https://{host}/media/[A-Za-z0-9_~%.\-]+?\.(?:{extensions})(?:\?[^"'\s>]*)?"#,
            host = regex::escape(MEDIA_HOST),
        );

        // Dots may or may not carry a backslash in escaped form.
        let escaped_host = MEDIA_HOST
            .split('.')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\\?\.");
        let escaped = format!(
            r"(?i)https:\\/\\/{escaped_host}\\/media\\/[A-Za-z0-9_~%.\-]+?\\?\.(?:{extensions})",
        );

        Ok(Self {
            raw_media_regex: Regex::new(&raw)?,
            escaped_media_regex: Regex::new(&escaped)?,
        })
    }
}
