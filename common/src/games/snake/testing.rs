use std::collections::VecDeque;

use super::audio::{AudioPlayer, MusicTrack, SoundEffect};
use super::input::{InputEvent, InputSource};
use super::render::{Color, Renderer, Sprite};
use super::types::Point;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    Sprite(Sprite, Point),
    Text(String, Point),
}

#[derive(Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCall>,
    pub frames: Vec<Vec<DrawCall>>,
}

impl RecordingRenderer {
    pub fn presented_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> &[DrawCall] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_texts(&self) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCall::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: Sprite, cell: Point) {
        self.pending.push(DrawCall::Sprite(sprite, cell));
    }

    fn draw_text(&mut self, text: &str, cell: Point) {
        self.pending.push(DrawCall::Text(text.to_string(), cell));
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCall {
    PlayMusic(MusicTrack),
    PauseMusic,
    ResumeMusic,
    Effect(SoundEffect),
}

#[derive(Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl AudioPlayer for RecordingAudio {
    fn play_music(&mut self, track: MusicTrack) {
        self.calls.push(AudioCall::PlayMusic(track));
    }

    fn pause_music(&mut self) {
        self.calls.push(AudioCall::PauseMusic);
    }

    fn resume_music(&mut self) {
        self.calls.push(AudioCall::ResumeMusic);
    }

    fn play_effect(&mut self, effect: SoundEffect) {
        self.calls.push(AudioCall::Effect(effect));
    }
}

/// Hands out one batch of events per poll, then nothing.
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
