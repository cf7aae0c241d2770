//! Core configuration, constants and grid geometry.

pub mod config;
pub mod constants;
pub mod geometry;

pub use config::GameConfig;
pub use geometry::{Playfield, Position, Rect};
