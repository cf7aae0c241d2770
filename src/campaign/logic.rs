//! Campaign level logic: obstacle blueprints, portal spawning, level advance.

use super::types::{LevelManager, Obstacle, Portal};
use crate::core::constants::{PORTAL_CELLS, PORTAL_EDGE_MARGIN_CELLS, PORTAL_SPAWN_ATTEMPTS};
use crate::core::geometry::{Playfield, Position, Rect};
use rand::Rng;

/// A straight run of obstacles, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wall {
    Horizontal { col: i32, row: i32, len: i32 },
    Vertical { col: i32, row: i32, len: i32 },
}

/// Wall layout for a level on a `cols` x `rows` grid.
///
/// Levels past the last blueprint reuse the hardest one.
fn blueprint(level: u32, cols: i32, rows: i32) -> Vec<Wall> {
    use Wall::{Horizontal as H, Vertical as V};

    let cx = cols / 2;
    let cy = rows / 2;

    match level {
        // Single bar across the middle
        1 => vec![H {
            col: cx - 3,
            row: cy,
            len: 6,
        }],
        // Cross
        2 => vec![
            H {
                col: cx - 3,
                row: cy,
                len: 6,
            },
            V {
                col: cx,
                row: cy - 3,
                len: 6,
            },
        ],
        // Four corner bars
        3 => vec![
            H {
                col: 2,
                row: 5,
                len: 4,
            },
            H {
                col: cols - 6,
                row: 5,
                len: 4,
            },
            H {
                col: 2,
                row: rows - 6,
                len: 4,
            },
            H {
                col: cols - 6,
                row: rows - 6,
                len: 4,
            },
        ],
        // Corner bars with a central spine
        4 => vec![
            H {
                col: 3,
                row: 7,
                len: 5,
            },
            H {
                col: cols - 8,
                row: 7,
                len: 5,
            },
            H {
                col: 3,
                row: rows - 8,
                len: 5,
            },
            H {
                col: cols - 8,
                row: rows - 8,
                len: 5,
            },
            V {
                col: cx,
                row: 5,
                len: 8,
            },
        ],
        // Enclosure with a cross in the middle
        _ => vec![
            H {
                col: 2,
                row: 6,
                len: 8,
            },
            H {
                col: 2,
                row: rows - 7,
                len: 8,
            },
            V {
                col: 4,
                row: 6,
                len: 6,
            },
            V {
                col: cols - 4,
                row: 6,
                len: 6,
            },
            H {
                col: cx - 3,
                row: cy,
                len: 6,
            },
            V {
                col: cx,
                row: cy - 4,
                len: 8,
            },
        ],
    }
}

/// Obstacles of `level` laid out on `playfield`.
fn level_obstacles(level: u32, playfield: &Playfield) -> Vec<Obstacle> {
    let cell = playfield.cell_size;
    let mut obstacles = Vec::new();
    for wall in blueprint(level, playfield.columns(), playfield.rows()) {
        let (col, row, len, (dc, dr)) = match wall {
            Wall::Horizontal { col, row, len } => (col, row, len, (1, 0)),
            Wall::Vertical { col, row, len } => (col, row, len, (0, 1)),
        };
        for i in 0..len {
            let pos = Position::new((col + i * dc) * cell, (row + i * dr) * cell);
            obstacles.push(Obstacle::new(pos, cell));
        }
    }
    obstacles
}

impl LevelManager {
    /// Reset the food counter and portal, and rebuild obstacles for `level`.
    pub fn start_level(&mut self, level: u32) {
        self.current_level = level;
        self.food_eaten_this_level = 0;
        self.portal = None;
        self.obstacles = level_obstacles(level, &self.playfield);

        log::info!(
            "Campaign level {} started with {} obstacles",
            level,
            self.obstacles.len()
        );
    }

    /// True if every level's walls fit the playfield and miss all of `cells`.
    ///
    /// A level advance resets the snake onto its start cells, so those must be
    /// clear on every level, not just the current one.
    pub fn layouts_clear_of(&self, cells: &[Rect]) -> bool {
        (1..=self.max_levels).all(|level| {
            level_obstacles(level, &self.playfield).iter().all(|obs| {
                self.in_bounds(&obs.rect) && !cells.iter().any(|cell| obs.rect.overlaps(cell))
            })
        })
    }

    /// Count one food eaten. Returns true if this opened the portal.
    pub fn on_food_eaten<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.food_eaten_this_level += 1;

        if self.food_eaten_this_level >= self.food_required_for_portal && self.portal.is_none() {
            return self.spawn_portal(rng);
        }
        false
    }

    /// Place and activate the portal on a spot clear of obstacles.
    ///
    /// Gives up after [`PORTAL_SPAWN_ATTEMPTS`]; the next food eaten retries.
    fn spawn_portal<R: Rng>(&mut self, rng: &mut R) -> bool {
        let cell = self.playfield.cell_size;
        let min = PORTAL_EDGE_MARGIN_CELLS;
        let max_col = (self.playfield.columns() - 2 * PORTAL_CELLS).max(min);
        let max_row = (self.playfield.rows() - 2 * PORTAL_CELLS).max(min);

        for _ in 0..PORTAL_SPAWN_ATTEMPTS {
            let pos = Position::new(
                rng.gen_range(min..=max_col) * cell,
                rng.gen_range(min..=max_row) * cell,
            );
            let mut portal = Portal::new(pos, cell);

            if self.in_bounds(&portal.rect) && !self.check_obstacle_collision(&portal.rect) {
                portal.activate();
                self.portal = Some(portal);
                log::info!("Portal opened at {:?} on level {}", pos, self.current_level);
                return true;
            }
        }

        log::warn!(
            "No clear portal spot found on level {} after {} attempts",
            self.current_level,
            PORTAL_SPAWN_ATTEMPTS
        );
        false
    }

    /// Advance to the next level. Returns false (and changes nothing) on the last one.
    pub fn next_level(&mut self) -> bool {
        if self.current_level < self.max_levels {
            self.start_level(self.current_level + 1);
            true
        } else {
            false
        }
    }

    /// True if `rect` fits inside the playfield.
    pub fn in_bounds(&self, rect: &Rect) -> bool {
        rect.x >= 0
            && rect.y >= 0
            && rect.x + rect.width <= self.playfield.width
            && rect.y + rect.height <= self.playfield.height
    }
}
