use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FieldSize, FoodPlacement, Point, WallCollisionMode};

pub const MIN_FIELD_SIDE: u32 = 5;
pub const MAX_FIELD_SIDE: u32 = 100;
pub const MIN_TICK_INTERVAL_MS: u32 = 50;
pub const MAX_TICK_INTERVAL_MS: u32 = 2000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub wall_collision_mode: WallCollisionMode,
    /// Lets the snake turn straight back onto its own neck.
    pub allow_reversal: bool,
    pub food_placement: FoodPlacement,
    pub snake_start: Point,
    pub food_start: Point,
}

impl GameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let side_range = MIN_FIELD_SIDE..=MAX_FIELD_SIDE;
        if !side_range.contains(&self.field_width) || !side_range.contains(&self.field_height) {
            return Err(format!(
                "field dimensions must be between {}x{} and {}x{}",
                MIN_FIELD_SIDE, MIN_FIELD_SIDE, MAX_FIELD_SIDE, MAX_FIELD_SIDE
            ));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between {} and {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        let field_size = self.field_size();
        if !field_size.contains(self.snake_start) {
            return Err("snake_start must lie inside the field".to_string());
        }
        if !field_size.contains(self.food_start) {
            return Err("food_start must lie inside the field".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 25,
            field_height: 20,
            tick_interval_ms: 300,
            wall_collision_mode: WallCollisionMode::Death,
            allow_reversal: false,
            food_placement: FoodPlacement::Anywhere,
            snake_start: Point::new(1, 1),
            food_start: Point::new(3, 3),
        }
    }
}
