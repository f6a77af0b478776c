//! Headless collaborators for the Pong core: input, audio, rendering and
//! the frame loop that ties them to a [`game_core::MatchController`].

pub mod audio;
pub mod autopilot;
pub mod driver;
pub mod render;

pub use audio::LogAudio;
pub use autopilot::Autopilot;
pub use driver::{run, MatchReport, RunOptions};
pub use render::TextRenderer;
