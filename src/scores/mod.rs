//! Score keeping across runs: the top-ten leaderboard and the single high score.

pub mod high_score;
pub mod leaderboard;

pub use high_score::load_high_score;
pub use leaderboard::{Leaderboard, LeaderboardEntry};

use crate::game::session::RunSummary;

/// Add a finished run to the board if it qualifies. Returns its rank.
pub fn record_run(board: &mut Leaderboard, summary: &RunSummary) -> Option<usize> {
    if !board.is_high_score(summary.score) {
        return None;
    }
    board.add_score(summary.score, summary.difficulty, summary.mode);
    board.get_rank(summary.score)
}
