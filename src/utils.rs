/// Decode bytes as UTF-8, silently dropping invalid sequences.
///
/// Scraped pages are often mis-encoded; the bytes around a bad sequence are
/// kept so URLs elsewhere in the document still match.
pub fn decode_lossy_drop(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
