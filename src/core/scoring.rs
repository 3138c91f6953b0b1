//! Scoring Engine: points, level, badges, streak and daily-challenge state.
//!
//! Pure state transition logic, no I/O. `score` is invoked exactly once per
//! successfully appended entry and is deterministic given the previous state,
//! the entry, the current log size and the reference date.

use crate::models::{Badge, TimeEntry};
use chrono::{Days, NaiveDate};

pub const POINTS_PER_LEVEL: u32 = 100;
pub const CATEGORY_BONUS: u32 = 10;
pub const DAILY_CHALLENGE_BONUS: u32 = 50;
pub const DEFAULT_DAILY_GOAL: u32 = 60;

#[derive(Debug, Clone)]
pub struct GamificationState {
    pub points: u32,
    pub level: u32,
    badges: Vec<Badge>,
    pub streak: u32,
    pub last_log_date: Option<NaiveDate>,
    pub daily_progress: u32,
    pub daily_goal: u32,
}

/// What a single scored entry changed, for the presentation layer.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// Base points plus category bonus. The daily-challenge bonus is reported
    /// through `new_badges`, not here.
    pub points_earned: u32,
    /// Badges awarded by this entry, in award order.
    pub new_badges: Vec<Badge>,
    pub leveled_up: bool,
}

impl Default for GamificationState {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_GOAL)
    }
}

impl GamificationState {
    pub fn new(daily_goal: u32) -> Self {
        Self {
            points: 0,
            level: 1,
            badges: Vec::new(),
            streak: 0,
            last_log_date: None,
            daily_progress: 0,
            daily_goal,
        }
    }

    /// Earned badges in insertion (award) order.
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Back to initial values. The configured daily goal survives.
    pub fn reset(&mut self) {
        let goal = self.daily_goal;
        *self = Self::new(goal);
    }

    /// Applies one appended entry to the state.
    ///
    /// `entry_count` is the log size *after* the append (first-log and
    /// ten-entries checks read it). `today` is the wall-clock date at
    /// submission time; only entries dated today advance the daily progress.
    pub fn score(&mut self, entry: &TimeEntry, entry_count: usize, today: NaiveDate) -> ScoreOutcome {
        let mut new_badges = Vec::new();

        // 1-3. Base points, category bonus, accumulate.
        let mut points_earned = entry.duration_min.max(0) as u32;
        if entry.parent.bonus_eligible() {
            points_earned += CATEGORY_BONUS;
        }
        self.points += points_earned;

        // 4. Daily challenge progress. No clock-driven midnight reset exists:
        // progress only moves when an entry dated today is submitted.
        if entry.date == today {
            self.daily_progress += entry.duration_min.max(0) as u32;
            if self.daily_progress >= self.daily_goal
                && self.try_award(Badge::DailyChallenge, &mut new_badges)
            {
                self.points += DAILY_CHALLENGE_BONUS;
            }
        }

        // 5. Streak, evaluated against the previous last_log_date. A gap
        // restarts at 1 (the new entry counts as day one); backdated or
        // same-day entries leave the streak unchanged.
        match self.last_log_date {
            None => self.streak = 1,
            Some(last) => {
                let next_day = last + Days::new(1);
                if entry.date == next_day {
                    self.streak += 1;
                } else if entry.date > next_day {
                    self.streak = 1;
                }
            }
        }
        self.last_log_date = Some(entry.date);

        // 6. Milestone badges.
        if entry_count == 1 {
            self.try_award(Badge::FirstLog, &mut new_badges);
        }
        if entry_count >= 10 {
            self.try_award(Badge::TenEntries, &mut new_badges);
        }
        if self.streak >= 3 {
            self.try_award(Badge::ThreeDayStreak, &mut new_badges);
        }

        // 7. Level check. A loop: the daily-challenge bonus can push the
        // total across more than one threshold at once.
        let mut leveled_up = false;
        while self.points / POINTS_PER_LEVEL >= self.level {
            self.level += 1;
            leveled_up = true;
        }

        ScoreOutcome {
            points_earned,
            new_badges,
            leveled_up,
        }
    }

    fn try_award(&mut self, badge: Badge, new_badges: &mut Vec<Badge>) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge);
        new_badges.push(badge);
        true
    }
}
