use super::HEADERS;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use csv::Writer;

/// Renders the log as UTF-8 CSV: header row plus one row per entry, values
/// exactly as formatted at entry creation. Same log in, same bytes out.
pub fn to_csv_bytes(entries: &[TimeEntry]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for entry in entries {
        wtr.write_record(entry.to_row())
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}
