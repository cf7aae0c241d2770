//! Serpent - terminal snake with Classic, Modern and Campaign modes.
//!
//! This module exposes the game logic for testing and external use.

pub mod app;
pub mod campaign;
pub mod core;
pub mod game;
pub mod input;
pub mod menu;
pub mod scores;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
