//! Campaign data structures: obstacles, the level portal and level state.

use crate::core::constants::{MAX_LEVELS, PORTAL_CELLS};
use crate::core::geometry::{Playfield, Position, Rect};

/// A single one-cell wall block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(pos: Position, size: i32) -> Self {
        Self {
            rect: Rect::square(pos, size),
        }
    }
}

/// The exit that leads to the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal {
    /// Box of `PORTAL_CELLS` x `PORTAL_CELLS` cells.
    pub rect: Rect,
    pub active: bool,
}

impl Portal {
    /// Create an inactive portal at `pos`.
    pub fn new(pos: Position, cell_size: i32) -> Self {
        Self {
            rect: Rect::square(pos, cell_size * PORTAL_CELLS),
            active: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }
}

/// Obstacles, portal and food counter for the current campaign level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelManager {
    pub playfield: Playfield,
    /// Current level, 1-based.
    pub current_level: u32,
    pub max_levels: u32,
    pub obstacles: Vec<Obstacle>,
    pub portal: Option<Portal>,
    pub food_eaten_this_level: u32,
    pub food_required_for_portal: u32,
}

impl LevelManager {
    /// Create a manager positioned on level 1.
    pub fn new(playfield: Playfield, food_required_for_portal: u32) -> Self {
        let mut manager = Self {
            playfield,
            current_level: 1,
            max_levels: MAX_LEVELS,
            obstacles: Vec::new(),
            portal: None,
            food_eaten_this_level: 0,
            food_required_for_portal,
        };
        manager.start_level(1);
        manager
    }

    /// True if `rect` touches any obstacle.
    pub fn check_obstacle_collision(&self, rect: &Rect) -> bool {
        self.obstacles.iter().any(|obs| obs.rect.overlaps(rect))
    }

    /// True if `rect` touches the portal while it is active.
    pub fn check_portal_collision(&self, rect: &Rect) -> bool {
        self.portal
            .as_ref()
            .is_some_and(|portal| portal.active && portal.rect.overlaps(rect))
    }

    pub fn is_final_level(&self) -> bool {
        self.current_level >= self.max_levels
    }

    /// True once the portal for this level is open.
    pub fn portal_open(&self) -> bool {
        self.portal.as_ref().is_some_and(|p| p.active)
    }

    /// Obstacle boxes, for food placement.
    pub fn obstacle_rects(&self) -> Vec<Rect> {
        self.obstacles.iter().map(|obs| obs.rect).collect()
    }
}
