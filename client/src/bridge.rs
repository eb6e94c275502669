use snake_common::games::snake::{Color, InputEvent, InputSource, Point, Renderer, SessionEvent, Sprite};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::state::SharedState;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite(Sprite, Point),
    Text(String, Point),
}

/// One presented picture, replayed by the UI on every repaint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

/// Collects draw calls and hands the finished frame to the UI thread.
pub struct FrameRenderer {
    shared_state: SharedState,
    pending: Frame,
}

impl FrameRenderer {
    pub fn new(shared_state: SharedState) -> Self {
        Self {
            shared_state,
            pending: Frame::default(),
        }
    }
}

impl Renderer for FrameRenderer {
    fn clear(&mut self, color: Color) {
        self.pending.commands.clear();
        self.pending.commands.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: Sprite, cell: Point) {
        self.pending.commands.push(DrawCommand::Sprite(sprite, cell));
    }

    fn draw_text(&mut self, text: &str, cell: Point) {
        self.pending
            .commands
            .push(DrawCommand::Text(text.to_string(), cell));
    }

    fn present(&mut self) {
        self.shared_state
            .publish_frame(std::mem::take(&mut self.pending));
    }
}

/// Writes a session milestone to the UI's event log.
pub fn log_session_event(shared_state: &SharedState, event: SessionEvent) {
    let message = match event {
        SessionEvent::FoodEaten { score } => format!("Food eaten, score {}", score),
        SessionEvent::GameOver {
            reason,
            final_score,
        } => format!("Snake {} with score {}", reason.describe(), final_score),
        SessionEvent::NewGame => "New game".to_string(),
    };
    shared_state.add_event_log(&message);
}

/// Input arriving from the UI thread over a channel.
pub struct ChannelInputSource {
    receiver: mpsc::UnboundedReceiver<InputEvent>,
}

impl ChannelInputSource {
    pub fn new(receiver: mpsc::UnboundedReceiver<InputEvent>) -> Self {
        Self { receiver }
    }
}

impl InputSource for ChannelInputSource {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    events.push(InputEvent::Quit);
                    break;
                }
            }
        }
        events
    }
}
