use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::bridge::Frame;

pub const EVENT_LOG_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicState {
    Stopped,
    Playing,
    Paused,
}

/// State shared between the game thread and the UI thread.
#[derive(Clone)]
pub struct SharedState {
    frame: Arc<Mutex<Frame>>,
    music: Arc<Mutex<MusicState>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
    should_close: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(Frame::default())),
            music: Arc::new(Mutex::new(MusicState::Stopped)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            context: Arc::new(Mutex::new(None)),
            should_close: Arc::new(Mutex::new(false)),
        }
    }

    pub fn publish_frame(&self, frame: Frame) {
        *lock(&self.frame) = frame;
        self.request_repaint();
    }

    pub fn frame(&self) -> Frame {
        lock(&self.frame).clone()
    }

    pub fn set_music_state(&self, state: MusicState) {
        *lock(&self.music) = state;
    }

    pub fn music_state(&self) -> MusicState {
        *lock(&self.music)
    }

    pub fn add_event_log(&self, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        lock(&self.event_log).enqueue(format!("[{}] {}", timestamp, message));
        self.request_repaint();
    }

    pub fn event_log(&self) -> Vec<String> {
        lock(&self.event_log).iter().cloned().collect()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn set_should_close(&self) {
        *lock(&self.should_close) = true;
        self.request_repaint();
    }

    pub fn should_close(&self) -> bool {
        *lock(&self.should_close)
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_keeps_latest_entries() {
        let state = SharedState::new();
        for i in 0..(EVENT_LOG_SIZE + 3) {
            state.add_event_log(&format!("event {}", i));
        }
        let log = state.event_log();
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert!(log[0].ends_with("event 3"));
        assert!(log[EVENT_LOG_SIZE - 1].ends_with(&format!("event {}", EVENT_LOG_SIZE + 2)));
    }

    #[test]
    fn test_clones_share_close_flag() {
        let state = SharedState::new();
        let other = state.clone();
        assert!(!other.should_close());
        state.set_should_close();
        assert!(other.should_close());
    }
}
