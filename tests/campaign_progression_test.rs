//! Integration test: playing the campaign from level 1 to the final portal.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serpent::campaign::LevelManager;
use serpent::core::config::GameConfig;
use serpent::core::geometry::{Playfield, Position};
use serpent::game::{
    step, Collision, Difficulty, GameMode, GameSession, SessionResult, Transition,
};

fn campaign_session(food_required: u32, seed: u64) -> (GameSession, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let config = GameConfig {
        food_required_for_portal: food_required,
        ..GameConfig::default()
    };
    let session = GameSession::new(config, Difficulty::Level1, GameMode::Campaign, 0, &mut rng);
    (session, rng)
}

fn feed_ahead(session: &mut GameSession) {
    let (dx, dy) = session.snake.pending_direction.delta();
    session.food.position = session.snake.position.moved_by(dx * 20, dy * 20);
}

/// Line the snake up one cell left of the open portal, heading right.
fn aim_at_portal(session: &mut GameSession) {
    let portal = session
        .level
        .as_ref()
        .and_then(|level| level.portal)
        .expect("portal should be open");
    let entry = portal.rect.top_left();
    session.snake.reset(entry.moved_by(-20, 0));
    // Food far below or above the portal row
    session.food.position = Position::new(entry.x, (entry.y + 300) % 560);
}

fn current_level(session: &GameSession) -> u32 {
    session.level.as_ref().map_or(0, |level| level.current_level)
}

#[test]
fn test_full_campaign_run() {
    let (mut session, mut rng) = campaign_session(1, 2024);

    for level in 1..=5 {
        assert_eq!(current_level(&session), level);
        assert_eq!(session.snake.len(), 3);

        feed_ahead(&mut session);
        let mut transition = step(&mut session, &mut rng);
        let portal_open = session.level.as_ref().unwrap().portal_open();
        assert!(portal_open || transition != Transition::Continue);

        if transition == Transition::Continue {
            aim_at_portal(&mut session);
            transition = step(&mut session, &mut rng);
        }

        if level < 5 {
            assert_eq!(transition, Transition::LevelAdvance(level + 1));
            assert!(!session.is_over());
        } else {
            assert_eq!(transition, Transition::CampaignWon);
        }
    }

    assert_eq!(session.result, Some(SessionResult::CampaignWon));
    let summary = session.finish();
    assert!(summary.score >= 5);
    assert_eq!(summary.mode, GameMode::Campaign);
}

#[test]
fn test_score_survives_level_advance() {
    let (mut session, mut rng) = campaign_session(2, 7);
    for _ in 0..2 {
        feed_ahead(&mut session);
        step(&mut session, &mut rng);
    }
    if current_level(&session) == 1 {
        aim_at_portal(&mut session);
        step(&mut session, &mut rng);
    }

    assert_eq!(current_level(&session), 2);
    assert!(session.score >= 2);
    assert_eq!(session.snake.len(), 3);
    assert_eq!(session.snake.position, session.config.snake_start);
    let level = session.level.as_ref().unwrap();
    assert_eq!(level.food_eaten_this_level, 0);
    assert!(level.portal.is_none());
}

#[test]
fn test_no_portal_before_threshold() {
    let (mut session, mut rng) = campaign_session(20, 3);
    for eaten in 1..20 {
        feed_ahead(&mut session);
        step(&mut session, &mut rng);
        let level = session.level.as_ref().unwrap();
        assert_eq!(level.food_eaten_this_level, eaten);
        assert!(level.portal.is_none());
        if session.snake.position.x >= 360 {
            break;
        }
    }
    assert!(!session.is_over());
}

#[test]
fn test_obstacle_ends_campaign_run() {
    let (mut session, mut rng) = campaign_session(20, 5);
    let obstacle = session.level.as_ref().unwrap().obstacles[0].rect.top_left();

    session.snake.reset(obstacle.moved_by(-20, 0));
    session.food.position = Position::new(0, 0);
    let transition = step(&mut session, &mut rng);

    assert_eq!(transition, Transition::GameOver(Collision::Obstacle));
    assert_eq!(session.result, Some(SessionResult::Died(Collision::Obstacle)));
}

#[test]
fn test_food_never_spawns_on_obstacles() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let field = Playfield::new(400, 600, 20);
    // Threshold out of reach so no portal interferes
    let mut manager = LevelManager::new(field, 1000);

    for level in 1..=5 {
        manager.start_level(level);
        let (mut session, _) = campaign_session(20, level as u64);
        session.level = Some(manager.clone());
        for _ in 0..30 {
            feed_ahead(&mut session);
            step(&mut session, &mut rng);
            let food = session.food.rect();
            assert!(!manager.check_obstacle_collision(&food));
            session.snake.reset(session.config.snake_start);
        }
    }
}
