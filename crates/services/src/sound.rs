use std::sync::Mutex;

/// The three feedback sounds the quiz plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
    Timeout,
}

/// Best-effort sound playback. Implementations must swallow their own
/// failures; a missing or broken audio backend never affects the session.
pub trait SoundPlayer: Send + Sync {
    fn play_correct(&self);
    fn play_wrong(&self);
    fn play_timeout(&self);
}

/// A player that plays nothing. Useful for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play_correct(&self) {}
    fn play_wrong(&self) {}
    fn play_timeout(&self) {}
}

/// Test double that records every cue in play order.
#[derive(Debug, Default)]
pub struct RecordingSoundPlayer {
    cues: Mutex<Vec<SoundCue>>,
}

impl RecordingSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.lock().expect("cue lock").clone()
    }

    fn record(&self, cue: SoundCue) {
        self.cues.lock().expect("cue lock").push(cue);
    }
}

impl SoundPlayer for RecordingSoundPlayer {
    fn play_correct(&self) {
        self.record(SoundCue::Correct);
    }

    fn play_wrong(&self) {
        self.record(SoundCue::Wrong);
    }

    fn play_timeout(&self) {
        self.record(SoundCue::Timeout);
    }
}
