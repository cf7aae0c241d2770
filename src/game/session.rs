//! A single run: owns the snake, food and campaign state, and steps them.

use super::food::Food;
use super::rules::{self, Collision, Transition};
use super::settings::{Difficulty, GameMode};
use super::snake::{Direction, Snake};
use crate::campaign::LevelManager;
use crate::core::config::GameConfig;
use crate::core::constants::MAX_TICK_DT_MS;
use crate::core::geometry::{Playfield, Rect};
use rand::Rng;

/// UI-agnostic input actions during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Up,
    Down,
    Left,
    Right,
    /// Toggles pause.
    Pause,
    Other,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Died(Collision),
    CampaignWon,
}

/// What the leaderboard and high-score collaborators need once a run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub result: Option<SessionResult>,
    /// True if the run beat the high score it started with.
    pub new_high_score: bool,
}

/// State of one run, owned by the control loop.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub playfield: Playfield,
    pub difficulty: Difficulty,
    pub mode: GameMode,

    pub snake: Snake,
    pub food: Food,
    /// Present only in Campaign mode.
    pub level: Option<LevelManager>,

    pub score: u32,
    /// Best score so far, including this run.
    pub high_score: u32,
    /// High score loaded when the run started.
    pub starting_high_score: u32,

    pub result: Option<SessionResult>,
    /// Steps are skipped while paused; nothing else changes.
    pub paused: bool,

    // Timing
    /// Movement interval in milliseconds (cached from difficulty).
    pub move_interval_ms: u64,
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total movement steps elapsed.
    pub tick_count: u64,
}

impl GameSession {
    /// Start a fresh run.
    pub fn new<R: Rng>(
        config: GameConfig,
        difficulty: Difficulty,
        mode: GameMode,
        high_score: u32,
        rng: &mut R,
    ) -> Self {
        let playfield = config.playfield();
        let snake = Snake::new(config.snake_start, config.cell_size);
        let level = match mode {
            GameMode::Campaign => Some(LevelManager::new(
                playfield,
                config.food_required_for_portal,
            )),
            GameMode::Classic | GameMode::Modern => None,
        };
        let forbidden = obstacle_rects(level.as_ref());
        let food = Food::spawn(rng, &playfield, config.food_size, &snake.body, &forbidden);

        log::info!(
            "New {} run at {} (high score {})",
            mode.name(),
            difficulty.name(),
            high_score
        );

        Self {
            playfield,
            difficulty,
            mode,
            snake,
            food,
            level,
            score: 0,
            high_score,
            starting_high_score: high_score,
            result: None,
            paused: false,
            move_interval_ms: difficulty.move_interval_ms(),
            accumulated_time_ms: 0,
            tick_count: 0,
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// True if this run beat the high score it started with.
    pub fn beat_high_score(&self) -> bool {
        self.score > self.starting_high_score
    }

    pub fn finish(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            difficulty: self.difficulty,
            mode: self.mode,
            result: self.result,
            new_high_score: self.beat_high_score(),
        }
    }
}

fn obstacle_rects(level: Option<&LevelManager>) -> Vec<Rect> {
    level.map(LevelManager::obstacle_rects).unwrap_or_default()
}

/// Process player input.
pub fn process_input(session: &mut GameSession, input: SessionInput) {
    if session.is_over() {
        return;
    }

    let direction = match input {
        SessionInput::Up => Direction::Up,
        SessionInput::Down => Direction::Down,
        SessionInput::Left => Direction::Left,
        SessionInput::Right => Direction::Right,
        SessionInput::Pause => {
            session.paused = !session.paused;
            return;
        }
        SessionInput::Other => return,
    };

    if !session.paused {
        session.snake.set_pending_direction(direction);
    }
}

/// Advance the run. Called from the main loop every frame.
///
/// `dt_ms` is milliseconds since the last call. Movement steps happen in
/// `move_interval_ms` increments. Returns every non-`Continue` transition
/// that occurred, in order.
pub fn tick<R: Rng>(session: &mut GameSession, dt_ms: u64, rng: &mut R) -> Vec<Transition> {
    let mut transitions = Vec::new();
    if session.is_over() || session.paused {
        return transitions;
    }

    // Clamp dt to prevent a burst of steps after a stall
    session.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);

    while session.accumulated_time_ms >= session.move_interval_ms {
        session.accumulated_time_ms -= session.move_interval_ms;
        let transition = step(session, rng);

        if transition != Transition::Continue {
            transitions.push(transition);
        }
        if transition.ends_run() {
            break;
        }
    }

    transitions
}

/// Single movement step: move, eat, count, apply the mode's rules.
pub fn step<R: Rng>(session: &mut GameSession, rng: &mut R) -> Transition {
    if session.is_over() {
        return Transition::Continue;
    }
    session.tick_count += 1;

    session.snake.advance();

    let head = session.playfield.cell_rect(session.snake.position);
    if session.food.is_hit_by(&head) {
        session.score += 1;
        session.high_score = session.high_score.max(session.score);
        session.food.mark_eaten();

        if let Some(level) = session.level.as_mut() {
            level.on_food_eaten(rng);
        }
    } else {
        session.snake.shrink_tail();
    }

    if !session.food.is_pending_spawn {
        let forbidden = obstacle_rects(session.level.as_ref());
        session
            .food
            .respawn(rng, &session.playfield, &session.snake.body, &forbidden);
    }

    let transition = rules::resolve(
        session.mode,
        &mut session.snake,
        &session.playfield,
        session.level.as_ref(),
    );
    apply_transition(session, transition, rng);
    transition
}

fn apply_transition<R: Rng>(session: &mut GameSession, transition: Transition, rng: &mut R) {
    match transition {
        Transition::Continue => {}
        Transition::GameOver(cause) => {
            log::info!(
                "Run over: snake {} with score {}",
                cause.describe(),
                session.score
            );
            session.result = Some(SessionResult::Died(cause));
        }
        Transition::CampaignWon => {
            log::info!("Campaign won with score {}", session.score);
            session.result = Some(SessionResult::CampaignWon);
        }
        Transition::LevelAdvance(next) => {
            let Some(level) = session.level.as_mut() else {
                return;
            };
            if !level.next_level() {
                return;
            }
            log::info!("Advanced to campaign level {}", next);

            session.snake.reset(session.config.snake_start);
            let forbidden = level.obstacle_rects();
            session
                .food
                .respawn(rng, &session.playfield, &session.snake.body, &forbidden);
        }
    }
}
