use super::food::Food;
use super::snake::Snake;
use super::types::{FieldSize, Point};

/// Segments this close to the head are skipped by the self-collision check.
pub const NECK_LENGTH: usize = 3;

/// Two entities collide when they occupy the same cell.
pub fn collides(a: Point, b: Point) -> bool {
    a == b
}

pub fn hits_food(snake: &Snake, food: &Food) -> bool {
    collides(snake.head(), food.position())
}

/// Index of the first body segment past the neck that the head sits on.
pub fn self_collision_index(snake: &Snake) -> Option<usize> {
    let head = snake.head();
    snake
        .segments()
        .enumerate()
        .skip(NECK_LENGTH)
        .find(|&(_, segment)| collides(head, segment))
        .map(|(index, _)| index)
}

pub fn hits_self(snake: &Snake) -> bool {
    self_collision_index(snake).is_some()
}

pub fn is_out_of_bounds(point: Point, field_size: &FieldSize) -> bool {
    !field_size.contains(point)
}
