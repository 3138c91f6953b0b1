//! Stats panel: the gamification sidebar rendered as plain terminal text.

use crate::core::scoring::{GamificationState, POINTS_PER_LEVEL};

const BAR_WIDTH: usize = 20;

/// Text progress bar, `filled` clamped to `total`.
fn progress_bar(filled: u32, total: u32) -> String {
    let total = total.max(1);
    let done = ((filled.min(total) as usize) * BAR_WIDTH) / total as usize;
    format!("[{}{}]", "#".repeat(done), "-".repeat(BAR_WIDTH - done))
}

/// Renders the full stats panel: points, level progress, streak,
/// daily-challenge progress and the badge list in award order.
pub fn render(game: &GamificationState) -> String {
    let mut out = String::new();

    out.push_str(&format!("Points : {}\n", game.points));
    out.push_str(&format!(
        "Level  : {}  {} to level {}\n",
        game.level,
        progress_bar(game.points % POINTS_PER_LEVEL, POINTS_PER_LEVEL),
        game.level + 1
    ));
    out.push_str(&format!("Streak : {} days\n", game.streak));
    out.push_str(&format!(
        "Daily  : {}  {}/{} min logged today\n",
        progress_bar(game.daily_progress, game.daily_goal),
        game.daily_progress,
        game.daily_goal
    ));

    if game.badges().is_empty() {
        out.push_str("Badges : none yet\n");
    } else {
        out.push_str("Badges :\n");
        for b in game.badges() {
            out.push_str(&format!("  🏆 {}\n", b.label()));
        }
    }

    out
}
