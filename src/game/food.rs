//! Food model: one food box on the playfield and its respawn rule.

use crate::core::constants::FOOD_OBSTACLE_SPAWN_ATTEMPTS;
use crate::core::geometry::{Playfield, Position, Rect};
use rand::Rng;
use std::collections::VecDeque;

/// The single food item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    /// Top-left corner of the food box.
    pub position: Position,
    /// Edge of the food box in pixels (may exceed one cell).
    pub size: i32,
    /// True while the food is displayed; false once eaten and awaiting respawn.
    pub is_pending_spawn: bool,
}

impl Food {
    /// Place food at a random position clear of `body` and, when possible, of `forbidden`.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        field: &Playfield,
        size: i32,
        body: &VecDeque<Position>,
        forbidden: &[Rect],
    ) -> Self {
        let mut food = Self {
            position: Position::new(0, 0),
            size,
            is_pending_spawn: false,
        };
        food.respawn(rng, field, body, forbidden);
        food
    }

    /// The food's bounding box.
    pub fn rect(&self) -> Rect {
        Rect::square(self.position, self.size)
    }

    /// True if the given head cell touches the food box.
    pub fn is_hit_by(&self, head: &Rect) -> bool {
        self.rect().overlaps(head)
    }

    pub fn mark_eaten(&mut self) {
        self.is_pending_spawn = false;
    }

    /// Move the food to a new random grid-aligned position.
    ///
    /// The food box never overlaps a body cell. At most
    /// [`FOOD_OBSTACLE_SPAWN_ATTEMPTS`] body-free candidates are checked
    /// against `forbidden`; the last one is kept if every candidate touched
    /// a forbidden rect.
    pub fn respawn<R: Rng>(
        &mut self,
        rng: &mut R,
        field: &Playfield,
        body: &VecDeque<Position>,
        forbidden: &[Rect],
    ) {
        let size = self.size;
        let blocked = |pos: Position| {
            let rect = Rect::square(pos, size);
            forbidden.iter().any(|r| r.overlaps(&rect))
        };

        let mut candidate = self.sample_clear_of_body(rng, field, body);
        let mut attempts = 1;
        while blocked(candidate) && attempts < FOOD_OBSTACLE_SPAWN_ATTEMPTS {
            candidate = self.sample_clear_of_body(rng, field, body);
            attempts += 1;
        }
        if blocked(candidate) {
            log::warn!(
                "Food spawn budget exhausted; placing at {:?} over an obstacle",
                candidate
            );
        }

        self.position = candidate;
        self.is_pending_spawn = true;
    }

    /// Uniform grid-aligned position with the whole box inside the playfield.
    fn random_position<R: Rng>(&self, rng: &mut R, field: &Playfield) -> Position {
        let cell = field.cell_size;
        let columns = ((field.width - self.size) / cell).max(1);
        let rows = ((field.height - self.size) / cell).max(1);
        Position::new(
            rng.gen_range(0..columns) * cell,
            rng.gen_range(0..rows) * cell,
        )
    }

    fn sample_clear_of_body<R: Rng>(
        &self,
        rng: &mut R,
        field: &Playfield,
        body: &VecDeque<Position>,
    ) -> Position {
        loop {
            let pos = self.random_position(rng, field);
            let rect = Rect::square(pos, self.size);
            if !body.iter().any(|&seg| field.cell_rect(seg).overlaps(&rect)) {
                return pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn field() -> Playfield {
        Playfield::new(400, 600, 20)
    }

    fn body() -> VecDeque<Position> {
        (0..12).map(|i| Position::new(100 + i * 20, 300)).collect()
    }

    #[test]
    fn test_spawn_is_grid_aligned_and_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let food = Food::spawn(&mut rng, &field(), 40, &body(), &[]);
            assert_eq!(food.position.x % 20, 0);
            assert_eq!(food.position.y % 20, 0);
            assert!(food.position.x >= 0 && food.position.x + 40 <= 400);
            assert!(food.position.y >= 0 && food.position.y + 40 <= 600);
            assert!(food.is_pending_spawn);
        }
    }

    #[test]
    fn test_respawn_never_overlaps_body() {
        let f = field();
        let body = body();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut food = Food::spawn(&mut rng, &f, 40, &body, &[]);
            for _ in 0..20 {
                food.respawn(&mut rng, &f, &body, &[]);
                let rect = food.rect();
                assert!(
                    body.iter().all(|&seg| !f.cell_rect(seg).overlaps(&rect)),
                    "seed {} placed food on the snake at {:?}",
                    seed,
                    food.position
                );
            }
        }
    }

    #[test]
    fn test_respawn_avoids_forbidden_when_possible() {
        let f = field();
        // Wall across the top half of the field
        let forbidden = vec![Rect::new(0, 0, 400, 300)];
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let food = Food::spawn(&mut rng, &f, 40, &VecDeque::new(), &forbidden);
            assert!(!forbidden[0].overlaps(&food.rect()));
        }
    }

    #[test]
    fn test_respawn_accepts_overlap_when_budget_exhausted() {
        let f = field();
        let forbidden = vec![Rect::new(0, 0, 400, 600)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let body = body();
        let food = Food::spawn(&mut rng, &f, 40, &body, &forbidden);
        // Placement still happens and still avoids the snake
        assert!(food.is_pending_spawn);
        assert!(body
            .iter()
            .all(|&seg| !f.cell_rect(seg).overlaps(&food.rect())));
    }

    #[test]
    fn test_head_hits_food_box_anywhere() {
        let food = Food {
            position: Position::new(100, 100),
            size: 40,
            is_pending_spawn: true,
        };
        let f = field();
        assert!(food.is_hit_by(&f.cell_rect(Position::new(100, 100))));
        assert!(food.is_hit_by(&f.cell_rect(Position::new(120, 120))));
        assert!(!food.is_hit_by(&f.cell_rect(Position::new(140, 100))));
        assert!(!food.is_hit_by(&f.cell_rect(Position::new(80, 100))));
    }

    #[test]
    fn test_mark_eaten() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut food = Food::spawn(&mut rng, &field(), 40, &body(), &[]);
        food.mark_eaten();
        assert!(!food.is_pending_spawn);
    }
}
