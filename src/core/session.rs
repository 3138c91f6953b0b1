//! Session state: the entry log plus the optional gamification layer.
//!
//! One explicit state object owned by the shell loop and passed by `&mut`
//! into every command handler. Created on session start, reset on explicit
//! clear, discarded on exit. Nothing is persisted.

use crate::core::duration::minutes_between;
use crate::core::scoring::{GamificationState, ScoreOutcome};
use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ParentCategory, TimeEntry};
use crate::utils::time::{parse_date, parse_time};
use chrono::NaiveDate;

/// Raw form input for one submission, exactly as typed.
#[derive(Debug, Default, Clone)]
pub struct EntryDraft {
    pub date: String, // empty = today
    pub start: String,
    pub end: String,
    pub parent: String,
    pub sub_category: String,
    pub description: String,
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub entry_index: usize,
    /// `None` when gamification is disabled for this session.
    pub score: Option<ScoreOutcome>,
}

pub struct Session {
    store: EntryStore,
    game: Option<GamificationState>,
}

impl Session {
    pub fn new(gamification: bool, daily_goal: u32) -> Self {
        Self {
            store: EntryStore::new(),
            game: gamification.then(|| GamificationState::new(daily_goal)),
        }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        self.store.all()
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn gamification(&self) -> Option<&GamificationState> {
        self.game.as_ref()
    }

    pub fn set_daily_goal(&mut self, goal: u32) {
        if let Some(game) = self.game.as_mut() {
            game.daily_goal = goal;
        }
    }

    /// Validates and appends one entry, then scores it.
    ///
    /// All-or-nothing: every validation runs before any state is touched, so
    /// a rejected submission leaves both the log and the gamification state
    /// exactly as they were.
    pub fn submit(&mut self, draft: &EntryDraft, today: NaiveDate) -> AppResult<SubmitOutcome> {
        let entry = validate_draft(draft, today)?;

        self.store.append(entry.clone());
        let entry_count = self.store.size();

        let score = self
            .game
            .as_mut()
            .map(|game| game.score(&entry, entry_count, today));

        Ok(SubmitOutcome {
            entry_index: entry_count - 1,
            score,
        })
    }

    /// Clears the log and resets gamification (daily goal preserved).
    pub fn reset(&mut self) {
        self.store.clear();
        if let Some(game) = self.game.as_mut() {
            game.reset();
        }
    }
}

/// Form validation: required fields, then parsing, then the time range.
fn validate_draft(draft: &EntryDraft, today: NaiveDate) -> AppResult<TimeEntry> {
    if draft.start.trim().is_empty() {
        return Err(AppError::MissingField("start time"));
    }
    if draft.end.trim().is_empty() {
        return Err(AppError::MissingField("end time"));
    }
    if draft.sub_category.trim().is_empty() {
        return Err(AppError::MissingField("sub-category"));
    }
    if draft.description.trim().is_empty() {
        return Err(AppError::MissingField("description"));
    }

    let date = if draft.date.trim().is_empty() {
        today
    } else {
        parse_date(draft.date.trim()).ok_or_else(|| AppError::InvalidDate(draft.date.clone()))?
    };

    let start =
        parse_time(draft.start.trim()).ok_or_else(|| AppError::InvalidTime(draft.start.clone()))?;
    let end =
        parse_time(draft.end.trim()).ok_or_else(|| AppError::InvalidTime(draft.end.clone()))?;

    let parent = ParentCategory::from_str(&draft.parent)
        .ok_or_else(|| AppError::InvalidCategory(draft.parent.clone()))?;

    let duration_min = minutes_between(date, start, end)?;

    Ok(TimeEntry {
        date,
        start,
        end,
        duration_min,
        parent,
        sub_category: draft.sub_category.trim().to_string(),
        description: draft.description.trim().to_string(),
    })
}
