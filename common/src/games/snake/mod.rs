mod audio;
mod collision;
mod food;
mod game_state;
mod input;
mod render;
mod session;
mod settings;
mod snake;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use audio::{AudioPlayer, MusicTrack, SoundEffect};
pub use collision::{NECK_LENGTH, collides, hits_food, hits_self, is_out_of_bounds, self_collision_index};
pub use food::Food;
pub use game_state::{GamePhase, SnakeGameState, TickOutcome};
pub use input::{InputEvent, InputSource, Key};
pub use render::{Color, Renderer, Sprite, render_game_over, render_playfield, score_cell};
pub use session::{SessionControl, SessionEvent, SessionSummary, SnakeSession};
pub use settings::{GameSettings, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
pub use snake::Snake;
pub use types::{DeathReason, Direction, FieldSize, FoodPlacement, Point, WallCollisionMode};
