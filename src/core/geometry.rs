//! Grid geometry: pixel positions, boxes and the wraparound rule.
//!
//! All coordinates are pixels and every position the game produces is a
//! multiple of the cell size. Boxes use half-open extents, so two boxes that
//! merely share an edge do not overlap.

use serde::{Deserialize, Serialize};

/// A position on the playfield, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta.
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square box of edge `size` at `pos`.
    pub fn square(pos: Position, size: i32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// AABB overlap test.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Playfield bounds and grid unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of grid columns.
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Cell-sized box at `pos`.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::square(pos, self.cell_size)
    }

    /// True if a cell at `pos` lies entirely inside the playfield.
    pub fn contains_cell(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x <= self.width - self.cell_size
            && pos.y >= 0
            && pos.y <= self.height - self.cell_size
    }

    /// Wrap a position that left the playfield back onto the opposite edge.
    ///
    /// Each axis is handled independently. Returns `None` if the position
    /// was already inside.
    pub fn wrap(&self, pos: Position) -> Option<Position> {
        let mut wrapped = pos;
        let mut changed = false;

        if pos.x < 0 {
            wrapped.x = self.width - self.cell_size;
            changed = true;
        } else if pos.x >= self.width {
            wrapped.x = 0;
            changed = true;
        }

        if pos.y < 0 {
            wrapped.y = self.height - self.cell_size;
            changed = true;
        } else if pos.y >= self.height {
            wrapped.y = 0;
            changed = true;
        }

        changed.then_some(wrapped)
    }
}
