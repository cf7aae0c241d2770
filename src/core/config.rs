use super::constants::*;
use super::geometry::{Playfield, Position, Rect};
use crate::campaign::LevelManager;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};

/// Playfield and rule configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub playfield_width: i32,
    /// Playfield height in pixels
    pub playfield_height: i32,
    /// Grid unit; snake segments and obstacles are one cell
    pub cell_size: i32,
    /// Edge of the food box in pixels
    pub food_size: i32,
    /// Head position of a fresh snake
    pub snake_start: Position,
    /// Food a campaign level needs before its portal opens
    pub food_required_for_portal: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            food_size: DEFAULT_FOOD_SIZE,
            snake_start: Position::new(DEFAULT_SNAKE_START.0, DEFAULT_SNAKE_START.1),
            food_required_for_portal: FOOD_REQUIRED_FOR_PORTAL,
        }
    }
}

impl GameConfig {
    /// Load `config.json` from the data directory, falling back to defaults.
    pub fn load() -> Self {
        persistence::load_json_or_default::<Self>(CONFIG_FILE).validated()
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height, self.cell_size)
    }

    /// Return `self` if the geometry is grid-consistent, otherwise the defaults.
    ///
    /// Dimensions, food size and start position must be positive multiples
    /// of the cell size, the food box must fit, and the initial snake body
    /// must lie inside the playfield. Every campaign level's walls must fit
    /// the grid and stay off the initial body.
    pub fn validated(self) -> Self {
        if self.is_valid() {
            self
        } else {
            log::warn!("Invalid game config {:?}, using defaults", self);
            Self::default()
        }
    }

    fn is_valid(&self) -> bool {
        let cell = self.cell_size;
        if cell <= 0 {
            return false;
        }
        let aligned = |v: i32| v > 0 && v % cell == 0;
        let tail_x = self.snake_start.x - (INITIAL_SNAKE_LENGTH as i32 - 1) * cell;

        aligned(self.playfield_width)
            && aligned(self.playfield_height)
            && aligned(self.food_size)
            && self.food_size < self.playfield_width
            && self.food_size < self.playfield_height
            && self.snake_start.x % cell == 0
            && self.snake_start.y % cell == 0
            && tail_x >= 0
            && self.playfield().contains_cell(self.snake_start)
            && self.food_required_for_portal > 0
            && self.campaign_layouts_fit()
    }

    /// Cells of a fresh snake: head at `snake_start`, tail trailing left.
    fn initial_body(&self) -> Vec<Rect> {
        let field = self.playfield();
        (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| field.cell_rect(self.snake_start.moved_by(-i * self.cell_size, 0)))
            .collect()
    }

    fn campaign_layouts_fit(&self) -> bool {
        LevelManager::new(self.playfield(), self.food_required_for_portal)
            .layouts_clear_of(&self.initial_body())
    }
}
