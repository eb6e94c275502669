use crate::games::SessionRng;
use crate::log;

use super::collision::{hits_food, is_out_of_bounds, self_collision_index};
use super::food::Food;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, FoodPlacement, WallCollisionMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver {
        reason: DeathReason,
        final_score: usize,
    },
}

/// What a single tick did, for the caller to turn into feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub death: Option<DeathReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Food,
    phase: GamePhase,
    settings: GameSettings,
    field_size: FieldSize,
    ticks: u64,
}

impl SnakeGameState {
    pub fn new(settings: GameSettings) -> Self {
        let snake = Snake::new(settings.snake_start);
        let food = Food::new(settings.food_start);
        Self::from_parts(settings, snake, food)
    }

    /// Builds a state around an existing snake and food, already playing.
    pub fn from_parts(settings: GameSettings, snake: Snake, food: Food) -> Self {
        Self {
            field_size: settings.field_size(),
            snake,
            food,
            phase: GamePhase::Playing,
            settings,
            ticks: 0,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    /// Ticks advanced in the current game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Queues a heading for the next tick. Ignored once the game is over, and
    /// when it would turn the snake straight back unless reversal is allowed.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }

        if !self.settings.allow_reversal
            && let Some(current) = self.snake.direction()
            && direction.is_opposite(&current)
        {
            return false;
        }

        self.snake.set_direction(direction);
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.is_playing() {
            return outcome;
        }

        self.snake.step();
        self.ticks += 1;

        let head = self.snake.head();
        if is_out_of_bounds(head, &self.field_size) {
            match self.settings.wall_collision_mode {
                WallCollisionMode::Death => {
                    self.end_game(DeathReason::WallCollision);
                    outcome.death = Some(DeathReason::WallCollision);
                    return outcome;
                }
                WallCollisionMode::WrapAround => {
                    let wrapped = self.field_size.wrap(head);
                    self.snake.replace_head(wrapped);
                }
                WallCollisionMode::Unbounded => {}
            }
        }

        if hits_food(&self.snake, &self.food) {
            let eaten_at = self.food.position();
            self.relocate_food(rng);
            self.snake.grow_by(1);
            outcome.ate_food = true;
            log!(
                "Ate food at ({}, {}). Score: {}",
                eaten_at.x,
                eaten_at.y,
                self.score()
            );
        }

        if let Some(index) = self_collision_index(&self.snake) {
            log!("Head ran into segment {}", index);
            self.end_game(DeathReason::SelfCollision);
            outcome.death = Some(DeathReason::SelfCollision);
        }

        outcome
    }

    /// Starts a fresh game after a game over. Returns `false` while playing.
    pub fn confirm(&mut self, rng: &mut SessionRng) -> bool {
        if self.is_playing() {
            return false;
        }

        self.snake = Snake::new(self.settings.snake_start);
        self.relocate_food(rng);
        self.phase = GamePhase::Playing;
        self.ticks = 0;
        log!(
            "New game. Food at ({}, {})",
            self.food.position().x,
            self.food.position().y
        );
        true
    }

    fn end_game(&mut self, reason: DeathReason) {
        let final_score = self.score();
        self.phase = GamePhase::GameOver {
            reason,
            final_score,
        };
        log!("Game over: snake {}. Final score: {}", reason.describe(), final_score);
    }

    fn relocate_food(&mut self, rng: &mut SessionRng) {
        match self.settings.food_placement {
            FoodPlacement::Anywhere => self.food.relocate(&self.field_size, rng),
            FoodPlacement::AvoidSnake => {
                self.food
                    .relocate_avoiding(&self.field_size, &self.snake, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Point;

    fn build_state(
        settings: GameSettings,
        segments: &[(i32, i32)],
        direction: Option<Direction>,
        food: (i32, i32),
    ) -> SnakeGameState {
        let snake =
            Snake::from_segments(segments.iter().map(|&(x, y)| Point::new(x, y)), direction)
                .unwrap();
        SnakeGameState::from_parts(settings, snake, Food::new(Point::new(food.0, food.1)))
    }

    #[test]
    fn test_new_game_starts_at_canonical_cells() {
        let state = SnakeGameState::new(GameSettings::default());
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Point::new(1, 1));
        assert_eq!(state.snake().direction(), None);
        assert_eq!(state.food().position(), Point::new(3, 3));
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_idle_snake_does_not_move() {
        let mut state = SnakeGameState::new(GameSettings::default());
        let mut rng = SessionRng::new(42);
        for _ in 0..5 {
            assert_eq!(state.tick(&mut rng), TickOutcome::default());
        }
        assert_eq!(state.snake().head(), Point::new(1, 1));
        assert_eq!(state.ticks(), 5);
    }

    #[test]
    fn test_eating_grows_by_one_and_moves_food() {
        let mut state = build_state(GameSettings::default(), &[(5, 5)], None, (5, 5));
        let mut rng = SessionRng::new(42);

        let outcome = state.tick(&mut rng);

        assert!(outcome.ate_food);
        assert_eq!(outcome.death, None);
        assert_eq!(state.snake().len(), 2);
        assert!(state.field_size().contains(state.food().position()));
    }

    #[test]
    fn test_food_lands_somewhere_else_over_many_meals() {
        let mut rng = SessionRng::new(5);
        let mut moved = 0;
        for _ in 0..1000 {
            let mut state = build_state(GameSettings::default(), &[(5, 5)], None, (5, 5));
            state.tick(&mut rng);
            if state.food().position() != Point::new(5, 5) {
                moved += 1;
            }
        }
        assert!(moved > 950);
    }

    #[test]
    fn test_length_only_grows_by_eating() {
        let mut state = build_state(
            GameSettings {
                wall_collision_mode: WallCollisionMode::WrapAround,
                ..GameSettings::default()
            },
            &[(2, 2)],
            Some(Direction::Right),
            (6, 2),
        );
        let mut rng = SessionRng::new(11);
        let mut previous_len = state.snake().len();
        for _ in 0..500 {
            let outcome = state.tick(&mut rng);
            if !state.is_playing() {
                break;
            }
            let len = state.snake().len();
            if outcome.ate_food {
                assert_eq!(len, previous_len + 1);
            } else {
                assert_eq!(len, previous_len);
            }
            previous_len = len;
        }
    }

    #[test]
    fn test_head_on_body_past_neck_ends_game() {
        let mut state = build_state(
            GameSettings::default(),
            &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Some(Direction::Up),
            (10, 10),
        );
        let mut rng = SessionRng::new(42);

        let outcome = state.tick(&mut rng);

        assert_eq!(outcome.death, Some(DeathReason::SelfCollision));
        assert_eq!(
            state.phase(),
            GamePhase::GameOver {
                reason: DeathReason::SelfCollision,
                final_score: 5
            }
        );
    }

    #[test]
    fn test_chasing_own_tail_is_safe_at_length_four() {
        let mut state = build_state(
            GameSettings::default(),
            &[(5, 5), (6, 5), (6, 4), (5, 4)],
            Some(Direction::Up),
            (10, 10),
        );
        let mut rng = SessionRng::new(42);
        state.tick(&mut rng);
        assert!(state.is_playing());
        assert_eq!(state.snake().head(), Point::new(5, 4));
    }

    #[test]
    fn test_short_snake_never_collides_with_itself() {
        let mut state = build_state(GameSettings::default(), &[(5, 5), (5, 5), (5, 5)], None, (10, 10));
        let mut rng = SessionRng::new(42);
        for _ in 0..10 {
            assert_eq!(state.tick(&mut rng).death, None);
        }
    }

    #[test]
    fn test_confirm_resets_after_game_over() {
        let mut state = build_state(
            GameSettings::default(),
            &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Some(Direction::Up),
            (10, 10),
        );
        let mut rng = SessionRng::new(42);
        state.tick(&mut rng);
        assert!(!state.is_playing());

        assert!(state.confirm(&mut rng));

        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Point::new(1, 1));
        assert_eq!(state.snake().direction(), None);
        assert!(state.field_size().contains(state.food().position()));
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    fn test_confirm_while_playing_is_ignored() {
        let mut state = build_state(GameSettings::default(), &[(7, 7), (6, 7)], Some(Direction::Right), (3, 3));
        let mut rng = SessionRng::new(42);
        assert!(!state.confirm(&mut rng));
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.snake().head(), Point::new(7, 7));
    }

    #[test]
    fn test_game_over_freezes_movement_and_input() {
        let mut state = build_state(GameSettings::default(), &[(0, 3)], Some(Direction::Left), (10, 10));
        let mut rng = SessionRng::new(42);
        state.tick(&mut rng);
        assert!(!state.is_playing());

        assert!(!state.set_heading(Direction::Down));
        let snapshot = state.snake().clone();
        assert_eq!(state.tick(&mut rng), TickOutcome::default());
        assert_eq!(state.snake(), &snapshot);
    }

    #[test]
    fn test_wall_death() {
        let mut state = build_state(GameSettings::default(), &[(24, 3)], Some(Direction::Right), (10, 10));
        let mut rng = SessionRng::new(42);
        let outcome = state.tick(&mut rng);
        assert_eq!(outcome.death, Some(DeathReason::WallCollision));
        assert_eq!(
            state.phase(),
            GamePhase::GameOver {
                reason: DeathReason::WallCollision,
                final_score: 1
            }
        );
    }

    #[test]
    fn test_wrap_around_reenters_opposite_edge() {
        let settings = GameSettings {
            wall_collision_mode: WallCollisionMode::WrapAround,
            ..GameSettings::default()
        };
        let mut state = build_state(settings, &[(24, 3), (23, 3)], Some(Direction::Right), (0, 3));
        let mut rng = SessionRng::new(42);

        let outcome = state.tick(&mut rng);

        assert!(state.is_playing());
        assert_eq!(state.snake().head(), Point::new(0, 3));
        assert!(outcome.ate_food);
    }

    #[test]
    fn test_unbounded_head_leaves_field() {
        let settings = GameSettings {
            wall_collision_mode: WallCollisionMode::Unbounded,
            ..GameSettings::default()
        };
        let mut state = build_state(settings, &[(0, 0)], Some(Direction::Up), (10, 10));
        let mut rng = SessionRng::new(42);
        state.tick(&mut rng);
        state.tick(&mut rng);
        assert!(state.is_playing());
        assert_eq!(state.snake().head(), Point::new(0, -2));
    }

    #[test]
    fn test_reversal_is_rejected_by_default() {
        let mut state = build_state(
            GameSettings::default(),
            &[(8, 5), (7, 5), (6, 5), (5, 5)],
            Some(Direction::Right),
            (20, 15),
        );
        let mut rng = SessionRng::new(42);

        assert!(!state.set_heading(Direction::Left));
        state.tick(&mut rng);

        assert_eq!(state.snake().head(), Point::new(9, 5));
        assert_eq!(state.snake().direction(), Some(Direction::Right));
    }

    #[test]
    fn test_reversal_check_uses_last_move_not_pending_turn() {
        let mut state = build_state(
            GameSettings::default(),
            &[(8, 5), (7, 5), (6, 5)],
            Some(Direction::Right),
            (20, 15),
        );
        let mut rng = SessionRng::new(42);

        assert!(state.set_heading(Direction::Up));
        assert!(!state.set_heading(Direction::Left));
        state.tick(&mut rng);

        assert_eq!(state.snake().head(), Point::new(8, 4));
    }

    #[test]
    fn test_allowed_reversal_folds_snake_over_itself() {
        let settings = GameSettings {
            allow_reversal: true,
            ..GameSettings::default()
        };
        let mut state = build_state(
            settings,
            &[(8, 5), (7, 5), (6, 5), (5, 5)],
            Some(Direction::Right),
            (20, 15),
        );
        let mut rng = SessionRng::new(42);

        assert!(state.set_heading(Direction::Left));
        state.tick(&mut rng);

        assert!(state.is_playing());
        let body: Vec<Point> = state.snake().segments().collect();
        assert_eq!(
            body,
            vec![Point::new(7, 5), Point::new(8, 5), Point::new(7, 5), Point::new(6, 5)]
        );
    }
}
