use super::game_state::SnakeGameState;
use super::types::{FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(110, 110, 5);
    pub const TEXT: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Drawn at the origin, covers the whole field.
    Background,
    Apple,
    Block,
}

/// Display surface the session draws into. Nothing shows until `present`.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, cell: Point);
    fn draw_text(&mut self, text: &str, cell: Point);
    fn present(&mut self);
}

pub fn score_cell(field_size: &FieldSize) -> Point {
    Point::new(field_size.width.saturating_sub(3) as i32, 1)
}

pub fn render_playfield(state: &SnakeGameState, renderer: &mut impl Renderer) {
    renderer.clear(Color::BACKGROUND);
    renderer.draw_sprite(Sprite::Background, Point::new(0, 0));

    for segment in state.snake().segments().filter(|p| !p.is_off_grid()) {
        renderer.draw_sprite(Sprite::Block, segment);
    }
    renderer.draw_sprite(Sprite::Apple, state.food().position());

    renderer.draw_text(
        &format!("Score: {}", state.score()),
        score_cell(state.field_size()),
    );
    renderer.present();
}

pub fn render_game_over(final_score: usize, renderer: &mut impl Renderer) {
    renderer.clear(Color::BACKGROUND);
    renderer.draw_text(
        &format!("Game is over! Your score is {}", final_score),
        Point::new(5, 7),
    );
    renderer.draw_text("Hit Enter to play again!", Point::new(5, 8));
    renderer.present();
}
