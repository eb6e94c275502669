#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Background,
}

impl MusicTrack {
    pub fn asset_name(&self) -> &'static str {
        match self {
            MusicTrack::Background => "bg_music_1",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Food eaten.
    Ding,
    Crash,
}

impl SoundEffect {
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Ding => "ding",
            SoundEffect::Crash => "crash",
        }
    }
}

/// Sound output driven by the session. Calls are fire-and-forget.
pub trait AudioPlayer {
    fn play_music(&mut self, track: MusicTrack);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn play_effect(&mut self, effect: SoundEffect);
}
