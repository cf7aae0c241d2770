//! Game mode rule engine.
//!
//! Runs once per step after the snake moved and food was resolved. Each mode
//! has its own handler; all of them only report what should happen next and
//! leave applying it (level change, score submission) to the session.

use super::settings::GameMode;
use super::snake::Snake;
use crate::campaign::LevelManager;
use crate::core::geometry::Playfield;

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
    Obstacle,
}

impl Collision {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Wall => "hit a wall",
            Self::SelfCollision => "bit its own tail",
            Self::Obstacle => "crashed into an obstacle",
        }
    }
}

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    GameOver(Collision),
    /// Move to the given campaign level.
    LevelAdvance(u32),
    /// Portal taken on the final level.
    CampaignWon,
}

impl Transition {
    /// True for transitions after which the run is over.
    pub fn ends_run(&self) -> bool {
        matches!(self, Self::GameOver(_) | Self::CampaignWon)
    }
}

/// Evaluate the active mode's rules against the snake's new head position.
///
/// Wrapping modes move the head (and `body[0]`) onto the opposite edge.
/// `level` is only consulted in Campaign mode.
pub fn resolve(
    mode: GameMode,
    snake: &mut Snake,
    field: &Playfield,
    level: Option<&LevelManager>,
) -> Transition {
    match mode {
        GameMode::Classic => resolve_classic(snake, field),
        GameMode::Modern => resolve_modern(snake, field),
        GameMode::Campaign => resolve_campaign(snake, field, level),
    }
}

fn resolve_classic(snake: &mut Snake, field: &Playfield) -> Transition {
    wrap_head(snake, field);

    if snake.check_self_collision() {
        return Transition::GameOver(Collision::SelfCollision);
    }
    Transition::Continue
}

fn resolve_modern(snake: &Snake, field: &Playfield) -> Transition {
    if snake.check_wall_collision(field.width, field.height) {
        return Transition::GameOver(Collision::Wall);
    }
    if snake.check_self_collision() {
        return Transition::GameOver(Collision::SelfCollision);
    }
    Transition::Continue
}

fn resolve_campaign(
    snake: &mut Snake,
    field: &Playfield,
    level: Option<&LevelManager>,
) -> Transition {
    wrap_head(snake, field);

    if let Some(level) = level {
        let head = field.cell_rect(snake.position);

        if level.check_obstacle_collision(&head) {
            return Transition::GameOver(Collision::Obstacle);
        }

        if level.check_portal_collision(&head) {
            return if level.is_final_level() {
                Transition::CampaignWon
            } else {
                Transition::LevelAdvance(level.current_level + 1)
            };
        }
    }

    if snake.check_self_collision() {
        return Transition::GameOver(Collision::SelfCollision);
    }
    Transition::Continue
}

/// Move an off-field head to the opposite edge. Only the head segment is corrected.
fn wrap_head(snake: &mut Snake, field: &Playfield) -> bool {
    match field.wrap(snake.position) {
        Some(wrapped) => {
            snake.relocate_head(wrapped);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::Portal;
    use crate::core::geometry::Position;
    use crate::game::snake::Direction;

    fn field() -> Playfield {
        Playfield::new(400, 600, 20)
    }

    /// Snake whose head has just stepped to `head`, heading `direction`.
    fn snake_with_head(head: Position, direction: Direction) -> Snake {
        let mut snake = Snake::new(Position::new(100, 60), 20);
        snake.direction = direction;
        snake.pending_direction = direction;
        snake.relocate_head(head);
        snake
    }

    #[test]
    fn test_classic_wraps_right_to_left_edge() {
        let mut snake = snake_with_head(Position::new(400, 60), Direction::Right);
        let t = resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(t, Transition::Continue);
        assert_eq!(snake.position, Position::new(0, 60));
        assert_eq!(snake.body[0], Position::new(0, 60));
    }

    #[test]
    fn test_classic_wraps_left_to_right_edge() {
        let mut snake = snake_with_head(Position::new(-20, 60), Direction::Left);
        resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(snake.position, Position::new(380, 60));
        assert_eq!(snake.body[0], snake.position);
    }

    #[test]
    fn test_classic_wraps_vertically() {
        let mut snake = snake_with_head(Position::new(100, -20), Direction::Up);
        resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(snake.position, Position::new(100, 580));

        let mut snake = snake_with_head(Position::new(100, 600), Direction::Down);
        resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(snake.position, Position::new(100, 0));
    }

    #[test]
    fn test_classic_only_head_corrected() {
        let mut snake = snake_with_head(Position::new(400, 60), Direction::Right);
        let second = snake.body[1];
        resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(snake.body[1], second);
    }

    #[test]
    fn test_classic_self_collision_ends_run() {
        let mut snake = Snake::new(Position::new(100, 60), 20);
        let tail = snake.body[2];
        snake.body.push_back(Position::new(40, 60));
        snake.relocate_head(tail);
        let t = resolve(GameMode::Classic, &mut snake, &field(), None);
        assert_eq!(t, Transition::GameOver(Collision::SelfCollision));
        assert!(t.ends_run());
    }

    #[test]
    fn test_modern_wall_is_fatal_and_no_wrap() {
        let mut snake = snake_with_head(Position::new(-20, 60), Direction::Left);
        let t = resolve(GameMode::Modern, &mut snake, &field(), None);
        assert_eq!(t, Transition::GameOver(Collision::Wall));
        assert_eq!(snake.position, Position::new(-20, 60));
    }

    #[test]
    fn test_modern_inside_continues() {
        let mut snake = snake_with_head(Position::new(380, 580), Direction::Right);
        let t = resolve(GameMode::Modern, &mut snake, &field(), None);
        assert_eq!(t, Transition::Continue);
    }

    #[test]
    fn test_campaign_wraps_like_classic() {
        let level = LevelManager::new(field(), 20);
        let mut snake = snake_with_head(Position::new(400, 60), Direction::Right);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), Some(&level));
        assert_eq!(t, Transition::Continue);
        assert_eq!(snake.position, Position::new(0, 60));
    }

    #[test]
    fn test_campaign_obstacle_is_fatal() {
        let level = LevelManager::new(field(), 20);
        let obstacle = level.obstacles[0].rect.top_left();
        let mut snake = snake_with_head(obstacle, Direction::Down);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), Some(&level));
        assert_eq!(t, Transition::GameOver(Collision::Obstacle));
    }

    fn level_with_portal(level_number: u32, at: Position) -> LevelManager {
        let mut level = LevelManager::new(field(), 20);
        level.start_level(level_number);
        let mut portal = Portal::new(at, 20);
        portal.activate();
        level.portal = Some(portal);
        level
    }

    #[test]
    fn test_campaign_portal_advances_level() {
        let level = level_with_portal(2, Position::new(40, 40));
        // Lower-right cell of the 2x2 portal
        let mut snake = snake_with_head(Position::new(60, 60), Direction::Right);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), Some(&level));
        assert_eq!(t, Transition::LevelAdvance(3));
        assert!(!t.ends_run());
    }

    #[test]
    fn test_campaign_portal_on_final_level_wins() {
        let level = level_with_portal(5, Position::new(40, 40));
        let mut snake = snake_with_head(Position::new(40, 40), Direction::Right);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), Some(&level));
        assert_eq!(t, Transition::CampaignWon);
        assert!(t.ends_run());
    }

    #[test]
    fn test_campaign_self_collision_is_fatal() {
        let level = LevelManager::new(field(), 20);
        let mut snake = Snake::new(Position::new(100, 60), 20);
        snake.body.push_back(Position::new(40, 60));
        let tail = snake.body[2];
        snake.relocate_head(tail);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), Some(&level));
        assert_eq!(t, Transition::GameOver(Collision::SelfCollision));
    }

    #[test]
    fn test_campaign_without_level_only_checks_self() {
        let mut snake = snake_with_head(Position::new(200, 200), Direction::Down);
        let t = resolve(GameMode::Campaign, &mut snake, &field(), None);
        assert_eq!(t, Transition::Continue);
    }
}
