use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::error::YoinkError;
use crate::utils::decode_lossy_drop;

/// Read the whole input file, dropping bytes that are not valid UTF-8.
pub async fn read_input(path: &str) -> Result<String, YoinkError> {
    let bytes = fs::read(Path::new(path))
        .await
        .map_err(|e| YoinkError::input_unavailable(path, e))?;

    let text = decode_lossy_drop(&bytes);
    debug!(
        path,
        bytes = bytes.len(),
        dropped = bytes.len() - text.len(),
        "read input"
    );

    Ok(text)
}
