use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;

/// Pretty-printed JSON array of the log, UTF-8.
pub fn to_json_bytes(entries: &[TimeEntry]) -> AppResult<Vec<u8>> {
    let mut bytes =
        serde_json::to_vec_pretty(entries).map_err(|e| AppError::Export(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}
