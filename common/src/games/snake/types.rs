use serde::{Deserialize, Serialize};

/// A grid cell. Signed so a head that leaves the field stays representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Placeholder position carried by freshly grown segments until the next step.
    pub const OFF_GRID: Point = Point {
        x: i32::MIN,
        y: i32::MIN,
    };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_off_grid(&self) -> bool {
        *self == Self::OFF_GRID
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// What happens when the head steps outside the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    Death,
    WrapAround,
    /// The head keeps going off-grid and the game carries on.
    Unbounded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPlacement {
    /// Any cell, including ones under the snake.
    Anywhere,
    AvoidSnake,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    SelfCollision,
    WallCollision,
}

impl DeathReason {
    pub fn describe(&self) -> &'static str {
        match self {
            DeathReason::SelfCollision => "ran into itself",
            DeathReason::WallCollision => "hit the wall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: u32,
    pub height: u32,
}

impl FieldSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    /// Folds an off-field point back onto the field, torus style.
    pub fn wrap(&self, point: Point) -> Point {
        let width = self.width as i64;
        let height = self.height as i64;
        Point::new(
            (point.x as i64).rem_euclid(width) as i32,
            (point.y as i64).rem_euclid(height) as i32,
        )
    }
}
