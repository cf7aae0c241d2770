//! Difficulty presets and game modes selected from the menu.

use serde::{Deserialize, Serialize};

/// Generate `ALL`, `from_index()` and `index()` for a fieldless preset enum.
macro_rules! preset_enum_impl {
    ($name:ident, [$($variant:ident),+ $(,)?]) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or(Self::ALL[0])
            }

            pub fn index(&self) -> usize {
                Self::ALL.iter().position(|v| v == self).unwrap_or(0)
            }
        }
    };
}

/// Speed presets. Difficulty only changes how often the snake steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Level1,
    Level2,
    #[default]
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
    Level8,
}

preset_enum_impl!(
    Difficulty,
    [Level1, Level2, Level3, Level4, Level5, Level6, Level7, Level8]
);

impl Difficulty {
    /// Movement steps per second (higher = faster).
    pub fn steps_per_second(&self) -> u64 {
        match self {
            Self::Level1 => 5,
            Self::Level2 => 7,
            Self::Level3 => 9,
            Self::Level4 => 11,
            Self::Level5 => 13,
            Self::Level6 => 15,
            Self::Level7 => 17,
            Self::Level8 => 20,
        }
    }

    /// Movement interval in milliseconds (lower = faster).
    pub fn move_interval_ms(&self) -> u64 {
        1000 / self.steps_per_second()
    }

    /// Display label, also stored in leaderboard entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Level1 => "Level 1",
            Self::Level2 => "Level 2",
            Self::Level3 => "Level 3",
            Self::Level4 => "Level 4",
            Self::Level5 => "Level 5",
            Self::Level6 => "Level 6",
            Self::Level7 => "Level 7",
            Self::Level8 => "Level 8",
        }
    }

    /// Parse a 1-based level number as given on the command line.
    pub fn from_arg(arg: &str) -> Option<Self> {
        let level: usize = arg.trim().parse().ok()?;
        if (1..=Self::ALL.len()).contains(&level) {
            Some(Self::from_index(level - 1))
        } else {
            None
        }
    }
}

/// Rule set for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Walls wrap around; only the snake's own body kills.
    #[default]
    Classic,
    /// Walls and the snake's own body kill.
    Modern,
    /// Five levels of obstacles; a portal leads to the next level.
    Campaign,
}

preset_enum_impl!(GameMode, [Classic, Modern, Campaign]);

impl GameMode {
    /// Display label, also stored in leaderboard entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Modern => "Modern",
            Self::Campaign => "Campaign",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Go through walls, die on body hit",
            Self::Modern => "Die on walls and body hit",
            Self::Campaign => "5 levels with obstacles and portals",
        }
    }

    /// True if the snake passes through the playfield edges.
    pub fn wraps(&self) -> bool {
        matches!(self, Self::Classic | Self::Campaign)
    }

    /// Parse a mode name as given on the command line (case-insensitive).
    pub fn from_arg(arg: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(arg.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_difficulties() {
        assert_eq!(Difficulty::ALL.len(), 8);
        assert_eq!(Difficulty::default(), Difficulty::Level3);
    }

    #[test]
    fn test_difficulty_speed_increases() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].steps_per_second() < pair[1].steps_per_second());
            assert!(pair[0].move_interval_ms() > pair[1].move_interval_ms());
        }
        assert_eq!(Difficulty::Level1.move_interval_ms(), 200);
        assert_eq!(Difficulty::Level8.move_interval_ms(), 50);
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(Difficulty::from_index(0), Difficulty::Level1);
        assert_eq!(Difficulty::from_index(7), Difficulty::Level8);
        assert_eq!(Difficulty::from_index(99), Difficulty::Level1);
        assert_eq!(Difficulty::Level5.index(), 4);
    }

    #[test]
    fn test_difficulty_from_arg() {
        assert_eq!(Difficulty::from_arg("1"), Some(Difficulty::Level1));
        assert_eq!(Difficulty::from_arg("8"), Some(Difficulty::Level8));
        assert_eq!(Difficulty::from_arg("0"), None);
        assert_eq!(Difficulty::from_arg("9"), None);
        assert_eq!(Difficulty::from_arg("fast"), None);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Level1.name(), "Level 1");
        assert_eq!(Difficulty::Level8.name(), "Level 8");
    }

    #[test]
    fn test_game_mode_from_arg() {
        assert_eq!(GameMode::from_arg("classic"), Some(GameMode::Classic));
        assert_eq!(GameMode::from_arg("MODERN"), Some(GameMode::Modern));
        assert_eq!(GameMode::from_arg("Campaign"), Some(GameMode::Campaign));
        assert_eq!(GameMode::from_arg("arcade"), None);
    }

    #[test]
    fn test_game_mode_wraps() {
        assert!(GameMode::Classic.wraps());
        assert!(!GameMode::Modern.wraps());
        assert!(GameMode::Campaign.wraps());
    }

    #[test]
    fn test_game_mode_index_roundtrip() {
        for (i, mode) in GameMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(GameMode::from_index(i), *mode);
        }
    }
}
