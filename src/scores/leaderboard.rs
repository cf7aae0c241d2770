//! Top-ten leaderboard: qualification, insertion and ranking.

use crate::core::constants::{
    LEADERBOARD_CAPACITY, LEADERBOARD_FILE, LEADERBOARD_TIMESTAMP_FORMAT,
};
use crate::game::settings::{Difficulty, GameMode};
use crate::utils::persistence;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// One finished run on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    /// Difficulty label, e.g. "Level 3"
    pub difficulty: String,
    /// Game mode label, e.g. "Classic"
    pub gamemode: String,
    /// Local time of submission, `%Y-%m-%d %H:%M:%S`
    #[serde(alias = "date")]
    pub timestamp: String,
}

/// Bounded list of entries sorted by score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from stored entries, restoring order and capacity.
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `score` would make the board.
    ///
    /// A full board only admits scores strictly above its lowest entry.
    pub fn is_high_score(&self, score: u32) -> bool {
        if self.entries.len() < LEADERBOARD_CAPACITY {
            return true;
        }
        self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Record a score stamped with the current local time.
    pub fn add_score(&mut self, score: u32, difficulty: Difficulty, mode: GameMode) {
        let timestamp = Local::now()
            .format(LEADERBOARD_TIMESTAMP_FORMAT)
            .to_string();
        self.add_score_at(score, difficulty.name(), mode.name(), timestamp);
    }

    /// Record a score with explicit labels and timestamp.
    ///
    /// The new entry goes after existing entries of equal score.
    pub fn add_score_at(
        &mut self,
        score: u32,
        difficulty: &str,
        gamemode: &str,
        timestamp: String,
    ) {
        self.entries.push(LeaderboardEntry {
            score,
            difficulty: difficulty.to_string(),
            gamemode: gamemode.to_string(),
            timestamp,
        });
        self.normalize();
    }

    /// 1-based rank of the first entry with exactly `score`.
    pub fn get_rank(&self, score: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.score == score)
            .map(|index| index + 1)
    }

    /// The best `n` entries.
    pub fn top_scores(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    // Stable sort: equal scores keep submission order
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
    }

    /// Load `leaderboard.json` from the data directory; empty if missing or corrupt.
    pub fn load() -> Self {
        let entries: Vec<LeaderboardEntry> = persistence::load_json_or_default(LEADERBOARD_FILE);
        Self::from_entries(entries)
    }

    pub fn load_from(path: &Path) -> Self {
        let entries: Vec<LeaderboardEntry> = persistence::load_json_from(path);
        Self::from_entries(entries)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        persistence::save_json_to(path, self)
    }
}
