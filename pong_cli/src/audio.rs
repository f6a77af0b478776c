use std::collections::HashMap;

use game_core::{AudioSink, SoundCue};

/// Audio sink that logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    plays: HashMap<SoundCue, u32>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: SoundCue) -> u32 {
        self.plays.get(&cue).copied().unwrap_or(0)
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        tracing::debug!(?cue, "sound");
        *self.plays.entry(cue).or_insert(0) += 1;
    }
}
