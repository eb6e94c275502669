use crate::games::SessionRng;

use super::snake::Snake;
use super::types::{FieldSize, Point};

const MAX_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves to a uniformly random cell of the field. Cells under the snake
    /// are fair game.
    pub fn relocate(&mut self, field_size: &FieldSize, rng: &mut SessionRng) {
        self.position = random_cell(field_size, rng);
    }

    /// Like [`relocate`](Self::relocate) but retries cells covered by the
    /// snake. Gives up after a bounded number of draws and keeps the last one.
    pub fn relocate_avoiding(
        &mut self,
        field_size: &FieldSize,
        snake: &Snake,
        rng: &mut SessionRng,
    ) {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            self.position = random_cell(field_size, rng);
            if !snake.occupies(self.position) {
                return;
            }
        }
    }
}

fn random_cell(field_size: &FieldSize, rng: &mut SessionRng) -> Point {
    let x = rng.random_range(0..field_size.width.max(1)) as i32;
    let y = rng.random_range(0..field_size.height.max(1)) as i32;
    Point::new(x, y)
}
