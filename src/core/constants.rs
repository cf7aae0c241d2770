// Playfield defaults (pixels; every position is a multiple of the cell size)
pub const DEFAULT_PLAYFIELD_WIDTH: i32 = 400;
pub const DEFAULT_PLAYFIELD_HEIGHT: i32 = 600;
pub const DEFAULT_CELL_SIZE: i32 = 20;
pub const DEFAULT_FOOD_SIZE: i32 = 40;
pub const DEFAULT_SNAKE_START: (i32, i32) = (100, 60);

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// Campaign
pub const MAX_LEVELS: u32 = 5;
pub const FOOD_REQUIRED_FOR_PORTAL: u32 = 20;
/// Portal box edge in cells.
pub const PORTAL_CELLS: i32 = 2;
/// Portals keep this many cells clear of the left/top edges.
pub const PORTAL_EDGE_MARGIN_CELLS: i32 = 2;

// Spawn retry budgets
pub const PORTAL_SPAWN_ATTEMPTS: u32 = 100;
pub const FOOD_OBSTACLE_SPAWN_ATTEMPTS: u32 = 100;

// Leaderboard
pub const LEADERBOARD_CAPACITY: usize = 10;
pub const LEADERBOARD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Timing
/// Largest frame delta fed to the step accumulator.
pub const MAX_TICK_DT_MS: u64 = 500;
pub const FRAME_MS: u64 = 16;

// Save files (inside the data directory)
pub const DATA_DIR_NAME: &str = ".serpent";
pub const CONFIG_FILE: &str = "config.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const HIGH_SCORE_FILE: &str = "high_score.txt";
pub const LOG_FILE: &str = "serpent.log";
