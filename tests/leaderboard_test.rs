//! Integration test: leaderboard qualification, ranking and on-disk format.

use serpent::core::config::GameConfig;
use serpent::game::{Collision, Difficulty, GameMode, RunSummary, SessionResult};
use serpent::scores::high_score::{load_high_score_from, save_high_score_to};
use serpent::scores::{record_run, Leaderboard};
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("serpent-it-{}", std::process::id()))
        .join(name)
}

fn full_board() -> Leaderboard {
    let mut board = Leaderboard::new();
    for (i, score) in [90, 80, 70, 60, 50, 40, 30, 25, 20, 15].into_iter().enumerate() {
        board.add_score_at(score, "Level 3", "Classic", format!("2024-01-{:02} 09:00:00", i + 1));
    }
    board
}

fn summary(score: u32, mode: GameMode) -> RunSummary {
    RunSummary {
        score,
        difficulty: Difficulty::Level6,
        mode,
        result: Some(SessionResult::Died(Collision::Obstacle)),
        new_high_score: false,
    }
}

#[test]
fn test_eleventh_lower_score_is_rejected() {
    let mut board = full_board();
    let before = board.clone();

    assert!(!board.is_high_score(10));
    assert_eq!(record_run(&mut board, &summary(10, GameMode::Modern)), None);
    assert_eq!(board, before);
    assert_eq!(board.len(), 10);
}

#[test]
fn test_tie_with_tenth_place_does_not_displace_it() {
    let mut board = full_board();
    assert!(!board.is_high_score(15));

    board.add_score_at(15, "Level 8", "Campaign", "2024-02-01 09:00:00".to_string());
    assert_eq!(board.len(), 10);
    assert_eq!(board.entries()[9].gamemode, "Classic");
}

#[test]
fn test_qualifying_score_drops_the_lowest() {
    let mut board = full_board();
    let rank = record_run(&mut board, &summary(55, GameMode::Campaign));

    assert_eq!(rank, Some(5));
    assert_eq!(board.len(), 10);
    assert_eq!(board.entries()[9].score, 20);
    assert_eq!(board.entries()[4].difficulty, "Level 6");
    assert_eq!(board.get_rank(15), None);
}

#[test]
fn test_get_rank_returns_first_match() {
    let mut board = Leaderboard::new();
    board.add_score_at(12, "Level 1", "Classic", "a".to_string());
    board.add_score_at(30, "Level 1", "Classic", "b".to_string());
    board.add_score_at(12, "Level 1", "Classic", "c".to_string());

    assert_eq!(board.get_rank(30), Some(1));
    assert_eq!(board.get_rank(12), Some(2));
    assert_eq!(board.entries()[1].timestamp, "a");
    assert_eq!(board.get_rank(99), None);
}

#[test]
fn test_file_roundtrip_and_legacy_date_key() {
    let path = temp_file("leaderboard.json");
    let board = full_board();
    board.save_to(&path).unwrap();
    assert_eq!(Leaderboard::load_from(&path), board);

    let legacy = r#"[{"score": 4, "difficulty": "Level 2", "gamemode": "Modern",
                      "date": "2023-06-01 18:30:00"}]"#;
    std::fs::write(&path, legacy).unwrap();
    let loaded = Leaderboard::load_from(&path);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.entries()[0].timestamp, "2023-06-01 18:30:00");
}

#[test]
fn test_corrupt_leaderboard_loads_empty() {
    let path = temp_file("corrupt-leaderboard.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json at all").unwrap();
    assert!(Leaderboard::load_from(&path).is_empty());
}

#[test]
fn test_high_score_file() {
    let path = temp_file("high_score.txt");
    assert_eq!(load_high_score_from(&temp_file("absent.txt")), 0);
    save_high_score_to(&path, 120).unwrap();
    assert_eq!(load_high_score_from(&path), 120);
}

#[test]
fn test_config_json_partial_uses_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{"cell_size": 20, "food_size": 20}"#).unwrap();
    let config = config.validated();
    assert_eq!(config.food_size, 20);
    assert_eq!(config.playfield_width, 400);
}
