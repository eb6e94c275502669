use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use snake_common::games::snake::{AudioPlayer, MusicTrack, SoundEffect};
use snake_common::{log, log_warn};

use crate::config::AudioConfig;
use crate::state::{MusicState, SharedState};

const AUDIO_EXTENSION: &str = "mp3";

/// The open output device. The stream has to stay alive for the handle to
/// produce sound.
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    pub fn open() -> Result<Self, String> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| format!("Failed to open audio output: {}", e))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn play(&self, path: &Path) -> Result<Sink, String> {
        let source = open_source(path)?;
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| format!("Failed to create audio sink: {}", e))?;
        sink.append(source);
        Ok(sink)
    }
}

pub fn asset_path(resources_dir: &Path, asset_name: &str) -> PathBuf {
    resources_dir.join(format!("{}.{}", asset_name, AUDIO_EXTENSION))
}

fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open sound {}: {}", path.display(), e))?;
    Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to decode sound {}: {}", path.display(), e))
}

/// Plays music and effects from the resources directory. Without an output
/// device, or when a file cannot be played, cues are only logged.
pub struct ClientAudioPlayer {
    shared_state: SharedState,
    config: AudioConfig,
    resources_dir: PathBuf,
    output: Option<AudioOutput>,
    music: Option<Sink>,
}

impl ClientAudioPlayer {
    pub fn new(shared_state: SharedState, config: AudioConfig, resources_dir: PathBuf) -> Self {
        let output = if config.music_enabled || config.effects_enabled {
            match AudioOutput::open() {
                Ok(output) => Some(output),
                Err(e) => {
                    log_warn!("{}, sounds will only be logged", e);
                    None
                }
            }
        } else {
            None
        };
        Self::with_output(shared_state, config, resources_dir, output)
    }

    fn with_output(
        shared_state: SharedState,
        config: AudioConfig,
        resources_dir: PathBuf,
        output: Option<AudioOutput>,
    ) -> Self {
        Self {
            shared_state,
            config,
            resources_dir,
            output,
            music: None,
        }
    }

    fn play_asset(&self, asset_name: &str) -> Option<Sink> {
        let output = self.output.as_ref()?;
        let path = asset_path(&self.resources_dir, asset_name);
        match output.play(&path) {
            Ok(sink) => Some(sink),
            Err(e) => {
                log_warn!("{}", e);
                None
            }
        }
    }
}

impl AudioPlayer for ClientAudioPlayer {
    fn play_music(&mut self, track: MusicTrack) {
        if !self.config.music_enabled {
            return;
        }
        log!("Music: {}", track.asset_name());
        self.music = self.play_asset(track.asset_name());
        self.shared_state.set_music_state(MusicState::Playing);
    }

    fn pause_music(&mut self) {
        if self.shared_state.music_state() != MusicState::Playing {
            return;
        }
        if let Some(music) = &self.music {
            music.pause();
        }
        self.shared_state.set_music_state(MusicState::Paused);
    }

    fn resume_music(&mut self) {
        if self.shared_state.music_state() != MusicState::Paused {
            return;
        }
        if let Some(music) = &self.music {
            music.play();
        }
        self.shared_state.set_music_state(MusicState::Playing);
    }

    fn play_effect(&mut self, effect: SoundEffect) {
        if !self.config.effects_enabled {
            return;
        }
        log!("Sound: {}", effect.asset_name());
        if let Some(sink) = self.play_asset(effect.asset_name()) {
            sink.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_player(shared_state: &SharedState, config: AudioConfig) -> ClientAudioPlayer {
        ClientAudioPlayer::with_output(
            shared_state.clone(),
            config,
            PathBuf::from("resources"),
            None,
        )
    }

    #[test]
    fn test_asset_path_uses_resources_dir() {
        let resources_dir = Path::new("assets").join("sounds");
        assert_eq!(
            asset_path(&resources_dir, MusicTrack::Background.asset_name()),
            resources_dir.join("bg_music_1.mp3")
        );
        assert_eq!(
            asset_path(&resources_dir, SoundEffect::Crash.asset_name()),
            resources_dir.join("crash.mp3")
        );
    }

    #[test]
    fn test_missing_sound_file_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("snake_missing_{}.mp3", rand::random::<u32>()));
        let err = open_source(&path).err().unwrap();
        assert!(err.starts_with("Failed to open sound"));
    }

    #[test]
    fn test_undecodable_sound_file_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("snake_garbage_{}.mp3", rand::random::<u32>()));
        std::fs::write(&path, b"definitely not audio").unwrap();

        let err = open_source(&path).err().unwrap();

        assert!(err.starts_with("Failed to decode sound"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_music_pauses_and_resumes_without_output() {
        let shared_state = SharedState::new();
        let mut audio = silent_player(&shared_state, AudioConfig::default());

        audio.play_music(MusicTrack::Background);
        assert_eq!(shared_state.music_state(), MusicState::Playing);
        audio.pause_music();
        assert_eq!(shared_state.music_state(), MusicState::Paused);
        audio.resume_music();
        assert_eq!(shared_state.music_state(), MusicState::Playing);
    }

    #[test]
    fn test_disabled_music_stays_stopped() {
        let shared_state = SharedState::new();
        let config = AudioConfig {
            music_enabled: false,
            ..AudioConfig::default()
        };
        let mut audio = silent_player(&shared_state, config);

        audio.play_music(MusicTrack::Background);
        audio.pause_music();
        audio.resume_music();

        assert_eq!(shared_state.music_state(), MusicState::Stopped);
        assert!(shared_state.event_log().is_empty());
    }

    #[test]
    fn test_effects_never_touch_the_event_log() {
        let shared_state = SharedState::new();
        let mut audio = silent_player(&shared_state, AudioConfig::default());
        audio.play_effect(SoundEffect::Ding);
        audio.play_effect(SoundEffect::Crash);
        assert!(shared_state.event_log().is_empty());
    }

    #[test]
    fn test_disabled_audio_does_not_open_a_device() {
        let config = AudioConfig {
            music_enabled: false,
            effects_enabled: false,
        };
        let audio = ClientAudioPlayer::new(SharedState::new(), config, PathBuf::from("resources"));
        assert!(audio.output.is_none());
    }
}
