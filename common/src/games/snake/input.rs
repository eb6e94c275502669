use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Return,
}

impl Key {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Escape | Key::Return => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Window closed or the input side went away.
    Quit,
}

pub trait InputSource {
    /// Everything that arrived since the last poll, oldest first.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
