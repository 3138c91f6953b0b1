use serde::Serialize;

/// One-time achievements. Never revoked except on full reset.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Badge {
    FirstLog,
    TenEntries,
    ThreeDayStreak,
    DailyChallenge,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::FirstLog => "First Log",
            Badge::TenEntries => "10 Entries",
            Badge::ThreeDayStreak => "3-Day Streak",
            Badge::DailyChallenge => "Daily Challenge",
        }
    }
}
