//! HUD and overlay text

use crate::ranking::RankingEntry;
use crate::sim::{GameOverReason, GameState};

/// Shown in the leaderboard when there are no entries
pub const RANKING_PLACEHOLDER: &str = "No records yet.";

/// Confirmation prompt before wiping the leaderboard
pub const RESET_CONFIRM: &str = "Really reset the ranking?";
/// Acknowledgement after the leaderboard is wiped
pub const RESET_DONE: &str = "The ranking has been reset.";

/// Mute button caption for the current state
pub fn mute_label(muted: bool) -> &'static str {
    if muted { "Unmute sound" } else { "Mute sound" }
}

/// One leaderboard line, e.g. `#1 - 80 pts (25. 10. 16. 14:03)`
pub fn ranking_line(rank: usize, entry: &RankingEntry) -> String {
    format!("#{} - {} pts ({})", rank, entry.score, entry.date)
}

pub fn score_text(state: &GameState) -> String {
    state.score.to_string()
}

pub fn lives_text(state: &GameState) -> String {
    state.lives.to_string()
}

/// Countdown text: the raw limit until time first comes off, then two decimals
pub fn timer_text(state: &GameState) -> String {
    if state.timer_started() {
        format!("{:.2}", state.time_left)
    } else {
        format!("{}", state.time_left)
    }
}

/// Game-over headline
pub fn game_over_title(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::TimeExpired => "GAME OVER (time expired)",
        GameOverReason::LivesExhausted => "GAME OVER (out of lives)",
    }
}

pub fn final_score_text(score: u64) -> String {
    format!("Final score: {}", score)
}
