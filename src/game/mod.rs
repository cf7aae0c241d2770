//! The snake simulation: model, food, mode rules and the per-run session.

pub mod food;
pub mod rules;
pub mod session;
pub mod settings;
pub mod snake;

pub use food::Food;
pub use rules::{Collision, Transition};
pub use session::{
    process_input, step, tick, GameSession, RunSummary, SessionInput, SessionResult,
};
pub use settings::{Difficulty, GameMode};
pub use snake::{Direction, Snake};
