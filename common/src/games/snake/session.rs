use tokio::time::{MissedTickBehavior, interval};

use crate::games::SessionRng;
use crate::log;

use super::audio::{AudioPlayer, MusicTrack, SoundEffect};
use super::game_state::SnakeGameState;
use super::input::{InputEvent, InputSource, Key};
use super::render::{Renderer, render_game_over, render_playfield};
use super::types::DeathReason;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub games_played: u32,
    pub best_score: usize,
}

/// Game milestones reported to the session's event hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    FoodEaten { score: usize },
    GameOver { reason: DeathReason, final_score: usize },
    NewGame,
}

type EventHook = Box<dyn FnMut(SessionEvent)>;

/// Drives one game state against its collaborators: poll input, advance one
/// tick, wait for the next tick interval.
pub struct SnakeSession<I, R, A>
where
    I: InputSource,
    R: Renderer,
    A: AudioPlayer,
{
    state: SnakeGameState,
    rng: SessionRng,
    input: I,
    renderer: R,
    audio: A,
    summary: SessionSummary,
    event_hook: Option<EventHook>,
}

impl<I, R, A> SnakeSession<I, R, A>
where
    I: InputSource,
    R: Renderer,
    A: AudioPlayer,
{
    pub fn new(state: SnakeGameState, rng: SessionRng, input: I, renderer: R, audio: A) -> Self {
        Self {
            state,
            rng,
            input,
            renderer,
            audio,
            summary: SessionSummary {
                games_played: 1,
                ..SessionSummary::default()
            },
            event_hook: None,
        }
    }

    /// Registers a callback for food, game-over and restart events.
    pub fn with_event_hook(mut self, hook: impl FnMut(SessionEvent) + 'static) -> Self {
        self.event_hook = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            best_score: self.summary.best_score.max(self.state.score()),
            ..self.summary
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub async fn run(mut self) -> SessionSummary {
        let mut tick_interval_timer = interval(self.state.settings().tick_interval());
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.start();

        loop {
            tick_interval_timer.tick().await;
            if self.frame() == SessionControl::Quit {
                break;
            }
        }

        let summary = self.summary();
        log!(
            "Session over after {} ticks, {} game(s), best score {}",
            summary.ticks,
            summary.games_played,
            summary.best_score
        );
        summary
    }

    /// Starts the music and shows the opening frame.
    pub fn start(&mut self) {
        log!("Session started with seed {}", self.rng.seed());
        self.audio.play_music(MusicTrack::Background);
        render_playfield(&self.state, &mut self.renderer);
    }

    /// Handles pending input, then advances the game by one tick if it is
    /// still running.
    pub fn frame(&mut self) -> SessionControl {
        for event in self.input.poll_events() {
            if self.handle_event(event) == SessionControl::Quit {
                return SessionControl::Quit;
            }
        }

        if self.state.is_playing() {
            self.advance();
        }

        SessionControl::Continue
    }

    fn handle_event(&mut self, event: InputEvent) -> SessionControl {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                log!("Quit requested");
                return SessionControl::Quit;
            }
            InputEvent::KeyDown(Key::Return) => self.restart(),
            InputEvent::KeyDown(key) => {
                if let Some(direction) = key.direction() {
                    self.state.set_heading(direction);
                }
            }
        }
        SessionControl::Continue
    }

    fn restart(&mut self) {
        if !self.state.confirm(&mut self.rng) {
            return;
        }
        self.summary.games_played += 1;
        log!("New game #{}", self.summary.games_played);
        self.emit(SessionEvent::NewGame);
        self.audio.resume_music();
        render_playfield(&self.state, &mut self.renderer);
    }

    fn advance(&mut self) {
        let outcome = self.state.tick(&mut self.rng);
        self.summary.ticks += 1;

        if outcome.ate_food {
            self.audio.play_effect(SoundEffect::Ding);
            self.emit(SessionEvent::FoodEaten {
                score: self.state.score(),
            });
        }

        match outcome.death {
            Some(reason) => {
                let final_score = self.state.score();
                self.summary.best_score = self.summary.best_score.max(final_score);
                self.emit(SessionEvent::GameOver {
                    reason,
                    final_score,
                });
                self.audio.play_effect(SoundEffect::Crash);
                render_game_over(final_score, &mut self.renderer);
                self.audio.pause_music();
            }
            None => render_playfield(&self.state, &mut self.renderer),
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(hook) = self.event_hook.as_mut() {
            hook(event);
        }
    }
}
