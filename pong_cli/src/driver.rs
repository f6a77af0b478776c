//! Frame loop: input, update, audio, render, once per tick

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use game_core::{dispatch_audio, MatchController, Params, Score, Side};

use crate::{Autopilot, LogAudio, TextRenderer};

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Matches to play; every match after the first is a replay
    pub matches: u32,
    /// Win threshold handed to the replay request
    pub replay_threshold: u32,
    /// Give up on a match after this many ticks
    pub max_ticks: u64,
    /// Pace frames at the tick rate and pause on game over
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            matches: 1,
            replay_threshold: Params::WIN_SCORE,
            max_ticks: 200_000,
            realtime: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// `None` when the tick limit ran out first
    pub winner: Option<Side>,
    pub score: Score,
    pub ticks: u64,
}

/// Drive `controller` through `options.matches` matches
pub fn run<W: Write>(
    controller: &mut MatchController,
    options: &RunOptions,
    audio: &mut LogAudio,
    out: &mut W,
) -> anyhow::Result<Vec<MatchReport>> {
    let autopilot = Autopilot::default();
    let mut renderer = TextRenderer::new();
    let frame = Duration::from_secs(1) / Params::TICK_RATE;
    let mut reports = Vec::new();

    for round in 0..options.matches {
        if round > 0 {
            controller.request_replay(options.replay_threshold);
            renderer.invalidate();
        }
        let start_tick = controller.tick();

        loop {
            let frame_start = Instant::now();

            let intent = autopilot.decide(
                &controller.ball(),
                &controller.paddle(Side::Player),
                &controller.field(),
            );
            controller.handle_input(intent);

            let events = controller.update();
            dispatch_audio(events, audio);

            renderer
                .render(&controller.snapshot(), out)
                .context("failed to write frame")?;

            let ticks = controller.tick() - start_tick;
            if controller.is_game_over() || ticks >= options.max_ticks {
                if !controller.is_game_over() {
                    tracing::warn!(ticks, "tick limit reached before the match ended");
                }
                reports.push(MatchReport {
                    winner: controller.winner(),
                    score: controller.score(),
                    ticks,
                });
                break;
            }

            if options.realtime {
                if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }

        if options.realtime && controller.is_game_over() {
            thread::sleep(Duration::from_millis(Params::GAME_OVER_PAUSE_MS));
        }
    }

    Ok(reports)
}
