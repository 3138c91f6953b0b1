mod csv;
mod json;

pub use csv::to_csv_bytes;
pub use json::to_json_bytes;

use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Export column headers, in table-display order.
pub(crate) const HEADERS: [&str; 7] = [
    "Date",
    "Start Time",
    "End Time",
    "Duration (mins)",
    "Parent Category",
    "Sub-Category",
    "Description",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Format from the target file extension. No extension means CSV.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None | Some("csv") => Ok(ExportFormat::Csv),
            Some("json") => Ok(ExportFormat::Json),
            Some(other) => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// `time_audit_<YYYYMMDD>.csv`, dated at the export moment.
pub fn default_export_filename(today: NaiveDate) -> String {
    format!("time_audit_{}.csv", today.format("%Y%m%d"))
}

/// Serializes the log and writes it to `path`.
pub fn export_to_file(path: &Path, entries: &[TimeEntry]) -> AppResult<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let bytes = match format {
        ExportFormat::Csv => to_csv_bytes(entries)?,
        ExportFormat::Json => to_json_bytes(entries)?,
    };
    fs::write(path, bytes)?;
    Ok(format)
}
