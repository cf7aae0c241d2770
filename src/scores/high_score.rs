//! Single best score, kept as a bare integer in `high_score.txt`.

use crate::core::constants::HIGH_SCORE_FILE;
use crate::utils::persistence;
use std::fs;
use std::io;
use std::path::Path;

/// Load the stored high score; 0 if the file is missing or unreadable.
pub fn load_high_score() -> u32 {
    match persistence::save_path(HIGH_SCORE_FILE) {
        Ok(path) => load_high_score_from(&path),
        Err(_) => 0,
    }
}

pub fn load_high_score_from(path: &Path) -> u32 {
    let Ok(text) = fs::read_to_string(path) else {
        return 0;
    };
    text.trim().parse().unwrap_or_else(|_| {
        log::warn!("Ignoring unreadable high score in {}", path.display());
        0
    })
}

pub fn save_high_score_to(path: &Path, score: u32) -> io::Result<()> {
    persistence::write_creating_parent(path, score.to_string())
}
