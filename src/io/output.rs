use std::io::Write;

use crate::models::MediaSet;

/// Sorted URLs, one per line. Empty set renders as an empty string.
pub fn render_listing(urls: MediaSet) -> String {
    let sorted = urls.into_sorted();
    if sorted.is_empty() {
        return String::new();
    }

    let mut content = sorted.join("\n");
    content.push('\n');
    content
}

pub fn write_listing<W: Write>(out: &mut W, urls: MediaSet) -> std::io::Result<()> {
    out.write_all(render_listing(urls).as_bytes())?;
    out.flush()
}
