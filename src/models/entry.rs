use super::category::ParentCategory;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One logged time-audit record. Immutable once appended: the log supports
/// only append and full reset, never edit or delete of single rows.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub date: NaiveDate,           // "YYYY-MM-DD"
    pub start: NaiveTime,          // "HH:MM"
    pub end: NaiveTime,            // "HH:MM"
    pub duration_min: i64,         // derived, always > 0
    pub parent: ParentCategory,    // EHS | HR | QA | ESG | Other
    pub sub_category: String,      // suggested list or free text
    pub description: String,       // free text, non-empty
}

impl TimeEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    /// Row in table-display order (also the export column order).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date_str(),
            self.start_str(),
            self.end_str(),
            self.duration_min.to_string(),
            self.parent.as_str().to_string(),
            self.sub_category.clone(),
            self.description.clone(),
        ]
    }
}
