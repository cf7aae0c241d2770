//! Top-level application state shared by the input handler, renderer and main loop.

use crate::core::config::GameConfig;
use crate::core::constants::{HIGH_SCORE_FILE, LEADERBOARD_FILE};
use crate::game::rules::Transition;
use crate::game::session::{self, GameSession, RunSummary, SessionInput};
use crate::menu::{Menu, MenuAction, MenuScreen};
use crate::scores::{self, high_score, Leaderboard};
use crate::utils::persistence;
use rand::Rng;
use std::path::Path;

/// How long the "Level N" banner stays up after a level advance.
pub const LEVEL_BANNER_MS: u64 = 1500;

pub struct App {
    pub config: GameConfig,
    pub menu: Menu,
    /// Current or just-finished run. `None` while in the menus.
    pub session: Option<GameSession>,
    /// True while keys drive the snake instead of a menu.
    pub playing: bool,
    pub leaderboard: Leaderboard,
    pub high_score: u32,
    /// Leaderboard rank of the last finished run, if it made the board.
    pub last_rank: Option<usize>,
    /// Level shown in the banner and the time it has left.
    pub level_banner: Option<(u32, u64)>,
}

impl App {
    pub fn new(config: GameConfig, menu: Menu, leaderboard: Leaderboard, high_score: u32) -> Self {
        Self {
            config,
            menu,
            session: None,
            playing: false,
            leaderboard,
            high_score,
            last_rank: None,
            level_banner: None,
        }
    }

    /// Begin a new run with the menu's difficulty and mode.
    pub fn start_run<R: Rng>(&mut self, rng: &mut R) {
        self.session = Some(GameSession::new(
            self.config.clone(),
            self.menu.difficulty,
            self.menu.mode,
            self.high_score,
            rng,
        ));
        self.playing = true;
        self.last_rank = None;
        self.level_banner = None;
    }

    /// Forward a gameplay input. Pausing hands control to the pause menu.
    pub fn handle_session_input(&mut self, input: SessionInput) {
        let Some(game) = self.session.as_mut() else {
            return;
        };
        session::process_input(game, input);

        if game.paused {
            self.playing = false;
            self.menu.open(MenuScreen::Paused);
        }
    }

    /// React to a menu action. Returns false when the app should quit.
    pub fn apply_menu_action<R: Rng>(&mut self, action: MenuAction, rng: &mut R) -> bool {
        match action {
            MenuAction::None => {}
            MenuAction::StartGame | MenuAction::Restart => self.start_run(rng),
            MenuAction::Resume => {
                if let Some(game) = self.session.as_mut() {
                    if game.paused {
                        session::process_input(game, SessionInput::Pause);
                    }
                    self.playing = true;
                }
            }
            MenuAction::BackToMain => {
                self.session = None;
                self.playing = false;
            }
            MenuAction::Quit => return false,
        }
        true
    }

    /// Advance the running session by `dt_ms`.
    ///
    /// Returns the run's summary once it ends, so the caller can save scores.
    pub fn update<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Option<RunSummary> {
        if let Some((_, remaining)) = self.level_banner.as_mut() {
            *remaining = remaining.saturating_sub(dt_ms);
            if *remaining == 0 {
                self.level_banner = None;
            }
        }

        if !self.playing {
            return None;
        }
        let game = self.session.as_mut()?;

        for transition in session::tick(game, dt_ms, rng) {
            if let Transition::LevelAdvance(level) = transition {
                self.level_banner = Some((level, LEVEL_BANNER_MS));
            }
        }

        if !game.is_over() {
            return None;
        }
        let summary = game.finish();
        self.last_rank = scores::record_run(&mut self.leaderboard, &summary);
        self.high_score = self.high_score.max(summary.score);
        self.playing = false;
        self.menu.open(MenuScreen::GameOver);
        Some(summary)
    }

    /// Persist scores after `summary`'s run in the data directory. Failures are logged.
    pub fn save_scores(&self, summary: &RunSummary) {
        match persistence::data_dir() {
            Ok(dir) => self.save_scores_in(&dir, summary),
            Err(e) => log::error!("Failed to locate data directory: {}", e),
        }
    }

    /// Write the leaderboard under `dir`, and the high score only if the run beat it.
    pub fn save_scores_in(&self, dir: &Path, summary: &RunSummary) {
        if let Err(e) = self.leaderboard.save_to(&dir.join(LEADERBOARD_FILE)) {
            log::error!("Failed to save leaderboard: {}", e);
        }
        if !summary.new_high_score {
            return;
        }
        let path = dir.join(HIGH_SCORE_FILE);
        if let Err(e) = high_score::save_high_score_to(&path, self.high_score) {
            log::error!("Failed to save high score: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Position;
    use crate::game::settings::GameMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app() -> App {
        App::new(GameConfig::default(), Menu::default(), Leaderboard::new(), 0)
    }

    /// Run a Modern game into the top wall with `score` already banked.
    fn finish_run(app: &mut App, score: u32, rng: &mut ChaCha8Rng) -> Option<RunSummary> {
        app.menu.mode = GameMode::Modern;
        app.start_run(rng);
        {
            let game = app.session.as_mut().unwrap();
            game.score = score;
            game.food.position = Position::new(360, 560);
            session::process_input(game, SessionInput::Up);
        }

        let mut summary = None;
        for _ in 0..20 {
            summary = app.update(200, rng).or(summary);
        }
        summary
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("serpent-app-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_start_run_uses_menu_choices() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();
        app.menu.mode = GameMode::Campaign;
        assert!(app.apply_menu_action(MenuAction::StartGame, &mut rng));

        let game = app.session.as_ref().unwrap();
        assert_eq!(game.mode, GameMode::Campaign);
        assert!(game.level.is_some());
        assert!(app.playing);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();
        app.start_run(&mut rng);

        app.handle_session_input(SessionInput::Pause);
        assert!(!app.playing);
        assert_eq!(app.menu.screen, MenuScreen::Paused);
        assert!(app.session.as_ref().unwrap().paused);

        app.apply_menu_action(MenuAction::Resume, &mut rng);
        assert!(app.playing);
        assert!(!app.session.as_ref().unwrap().paused);
    }

    #[test]
    fn test_run_end_records_score_and_opens_game_over() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();

        let summary = finish_run(&mut app, 4, &mut rng).expect("run should end at the wall");
        assert_eq!(summary.score, 4);
        assert!(summary.new_high_score);
        assert!(!app.playing);
        assert_eq!(app.menu.screen, MenuScreen::GameOver);
        assert_eq!(app.last_rank, Some(1));
        assert_eq!(app.leaderboard.len(), 1);
        assert_eq!(app.high_score, 4);
    }

    #[test]
    fn test_save_scores_writes_new_high_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = App::new(GameConfig::default(), Menu::default(), Leaderboard::new(), 3);
        let dir = temp_dir("beaten");

        let summary = finish_run(&mut app, 7, &mut rng).unwrap();
        app.save_scores_in(&dir, &summary);

        assert_eq!(high_score::load_high_score_from(&dir.join(HIGH_SCORE_FILE)), 7);
        assert_eq!(Leaderboard::load_from(&dir.join(LEADERBOARD_FILE)).len(), 1);
    }

    #[test]
    fn test_save_scores_keeps_unbeaten_high_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = App::new(GameConfig::default(), Menu::default(), Leaderboard::new(), 10);
        let dir = temp_dir("unbeaten");
        let high_score_path = dir.join(HIGH_SCORE_FILE);
        // A value the app would never write, to catch any rewrite
        high_score::save_high_score_to(&high_score_path, 12).unwrap();

        let summary = finish_run(&mut app, 4, &mut rng).unwrap();
        assert!(!summary.new_high_score);
        app.save_scores_in(&dir, &summary);

        assert_eq!(high_score::load_high_score_from(&high_score_path), 12);
        assert_eq!(app.high_score, 10);
        assert_eq!(Leaderboard::load_from(&dir.join(LEADERBOARD_FILE)).len(), 1);
    }

    #[test]
    fn test_back_to_main_drops_session() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();
        app.start_run(&mut rng);
        app.apply_menu_action(MenuAction::BackToMain, &mut rng);
        assert!(app.session.is_none());
        assert!(!app.playing);
    }

    #[test]
    fn test_quit_action() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();
        assert!(!app.apply_menu_action(MenuAction::Quit, &mut rng));
    }

    #[test]
    fn test_level_banner_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut app = app();
        app.level_banner = Some((2, 1000));
        app.update(600, &mut rng);
        assert_eq!(app.level_banner, Some((2, 400)));
        app.update(600, &mut rng);
        assert!(app.level_banner.is_none());
    }
}
