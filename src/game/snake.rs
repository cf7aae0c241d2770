//! Snake model: head position, direction buffer and body segments.

use crate::core::constants::INITIAL_SNAKE_LENGTH;
use crate::core::geometry::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The player's snake.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Head position; equals `body[0]` after every move.
    pub position: Position,
    /// Body segments. Head is at the front (index 0).
    pub body: VecDeque<Position>,
    /// Current movement direction.
    pub direction: Direction,
    /// Buffered next direction, applied at the start of the next step.
    pub pending_direction: Direction,
    /// Grid unit; one step moves the head this many pixels.
    pub size: i32,
}

impl Snake {
    /// Create a snake of the initial length with its body trailing left of `head`.
    pub fn new(head: Position, size: i32) -> Self {
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| head.moved_by(-i * size, 0))
            .collect();

        Self {
            position: head,
            body,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            size,
        }
    }

    /// Restore the initial shape, position and heading.
    pub fn reset(&mut self, head: Position) {
        *self = Self::new(head, self.size);
    }

    /// Buffer a direction change. A 180-degree reversal is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = direction;
        }
    }

    /// Apply the buffered direction and push a new head one cell ahead.
    ///
    /// The body grows by one; call [`Snake::shrink_tail`] when nothing was eaten.
    pub fn advance(&mut self) {
        self.direction = self.pending_direction;
        let (dx, dy) = self.direction.delta();
        self.position = self.position.moved_by(dx * self.size, dy * self.size);
        self.body.push_front(self.position);
    }

    /// Remove the last segment.
    pub fn shrink_tail(&mut self) {
        self.body.pop_back();
    }

    /// Move the head to `pos`, keeping `body[0]` in sync.
    pub fn relocate_head(&mut self, pos: Position) {
        self.position = pos;
        if let Some(head) = self.body.front_mut() {
            *head = pos;
        }
    }

    /// True if the head sits exactly on any non-head segment.
    pub fn check_self_collision(&self) -> bool {
        self.body.iter().skip(1).any(|&seg| seg == self.position)
    }

    /// True if the head lies outside `[0, width - size] x [0, height - size]`.
    pub fn check_wall_collision(&self, width: i32, height: i32) -> bool {
        self.position.x < 0
            || self.position.x > width - self.size
            || self.position.y < 0
            || self.position.y > height - self.size
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
