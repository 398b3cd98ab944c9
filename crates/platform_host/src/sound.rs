//! UI sound cue contracts.

use std::cell::RefCell;

/// Host service that plays short named UI sound cues.
pub trait SoundService {
    /// Plays the cue named `cue` (e.g. `"click"`, `"minimize"`). Unknown cues are ignored.
    fn play(&self, cue: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent sound service.
pub struct NoopSoundService;

impl SoundService for NoopSoundService {
    fn play(&self, _cue: &str) {}
}

#[derive(Debug, Default)]
/// Sound service that records the cues it was asked to play.
pub struct MemorySoundService {
    played: RefCell<Vec<String>>,
}

impl MemorySoundService {
    /// Cues played so far, oldest first.
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundService for MemorySoundService {
    fn play(&self, cue: &str) {
        self.played.borrow_mut().push(cue.to_string());
    }
}
