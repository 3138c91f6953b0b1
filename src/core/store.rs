//! Entry Store: ordered, append-only, in-memory log of time entries.
//! No persistence by design, the log lives and dies with the session.

use crate::models::TimeEntry;

#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<TimeEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end of the log. Existing rows are never touched.
    pub fn append(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Empties the log entirely.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only ordered view for display and export.
    pub fn all(&self) -> &[TimeEntry] {
        &self.entries
    }
}
