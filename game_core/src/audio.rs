//! Sound cues emitted by the simulation
//!
//! The core never plays audio. It reports [`GameEvent`]s, and a driver hands
//! the matching cues to whatever [`AudioSink`] it owns.

use crate::resources::{Events, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    WallBounce,
    PaddleHit,
    Score,
}

impl SoundCue {
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce => Some(SoundCue::WallBounce),
            GameEvent::PaddleHit(_) => Some(SoundCue::PaddleHit),
            GameEvent::Scored(_) => Some(SoundCue::Score),
            GameEvent::MatchWon(_) => None,
        }
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Silent sink for headless runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Forward this tick's cues to `sink`, in event order
pub fn dispatch_audio<S: AudioSink + ?Sized>(events: &Events, sink: &mut S) {
    for cue in events.iter().filter_map(SoundCue::for_event) {
        sink.play(cue);
    }
}
