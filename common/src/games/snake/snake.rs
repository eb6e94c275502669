use std::collections::VecDeque;

use super::types::{Direction, Point};

/// The player's snake. Head is at index 0, tail at the back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// A one-segment snake that is not moving yet.
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            direction: None,
            pending_direction: None,
        }
    }

    pub fn from_segments(
        segments: impl IntoIterator<Item = Point>,
        direction: Option<Direction>,
    ) -> Result<Self, String> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return Err("Snake needs at least one segment".to_string());
        }
        Ok(Self {
            body,
            direction,
            pending_direction: None,
        })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segment(&self, index: usize) -> Option<Point> {
        self.body.get(index).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Direction of the last step taken, `None` while the snake has not moved.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Queues a heading for the next step, replacing any queued one.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// The heading the next step will use.
    pub fn heading(&self) -> Option<Direction> {
        self.pending_direction.or(self.direction)
    }

    pub fn grow_by(&mut self, segments: usize) {
        self.body.extend(std::iter::repeat_n(Point::OFF_GRID, segments));
    }

    /// Moves one cell. Every segment takes its predecessor's place and the
    /// head advances along the heading; without a heading the head stays put.
    pub fn step(&mut self) {
        if let Some(next_direction) = self.pending_direction.take() {
            self.direction = Some(next_direction);
        }

        let head = self.head();
        let next_head = match self.direction {
            Some(direction) => head.moved(direction),
            None => head,
        };

        self.body.push_front(next_head);
        self.body.pop_back();
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub(crate) fn replace_head(&mut self, point: Point) {
        if let Some(head) = self.body.front_mut() {
            *head = point;
        }
    }
}
