//! Match controller
//!
//! Owns the world (two paddles and a ball), the score and the match phase,
//! and advances them one tick at a time. Drivers call [`MatchController::handle_input`],
//! then [`MatchController::update`], then read a [`RenderSnapshot`].

use hecs::{Entity, World};
use serde::Serialize;

use crate::components::{Ball, Intent, Paddle, PaddleControl, Side};
use crate::config::{Config, ConfigError};
use crate::map::{Aabb, Playfield};
use crate::resources::{Events, GameEvent, GameRng, Score};
use crate::systems::apply_intent;
use crate::{create_ball, create_paddle, step};

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    Playing,
    /// Terminal until a replay is requested
    GameOver { winner: Side },
}

/// Read-only view of the match for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub player_paddle: Aabb,
    pub ai_paddle: Aabb,
    pub ball: Aabb,
    pub player_score: u32,
    pub ai_score: u32,
    pub max_score: u32,
    pub game_over: bool,
    pub winner: Option<&'static str>,
    pub tick: u64,
}

pub fn winner_label(side: Side) -> &'static str {
    match side {
        Side::Player => "Player Wins!",
        Side::Ai => "AI Wins!",
    }
}

pub struct MatchController {
    world: World,
    player: Entity,
    ai: Entity,
    ball: Entity,
    field: Playfield,
    config: Config,
    score: Score,
    phase: MatchPhase,
    events: Events,
    rng: GameRng,
    tick: u64,
}

impl MatchController {
    /// Set up a match: paddles centered on their sides, ball served from center
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Playfield::from_config(&config);
        let mut world = World::new();

        let player = create_paddle(&mut world, Side::Player, PaddleControl::Manual, &config);
        let ai = create_paddle(&mut world, Side::Ai, PaddleControl::Tracking, &config);

        let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO, config.ball_size);
        ball.reset(&field, &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel, ball.size);

        tracing::info!(win_score = config.win_score, "match started");

        Ok(Self {
            world,
            player,
            ai,
            ball,
            field,
            config,
            score: Score::new(),
            phase: MatchPhase::Playing,
            events: Events::new(),
            rng,
            tick: 0,
        })
    }

    /// Move the player's paddle for this tick's intent. Ignored once the
    /// match is over.
    pub fn handle_input(&mut self, intent: Intent) {
        if self.is_game_over() {
            return;
        }
        apply_intent(&mut self.world, intent, self.config.player_step, &self.field);
    }

    /// Advance one tick. Does nothing once the match is over.
    ///
    /// Returns the events of this tick; they stay readable until the next call.
    pub fn update(&mut self) -> &Events {
        self.events.clear();

        if self.is_game_over() {
            return &self.events;
        }

        self.tick += 1;
        let scorer = step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        // The score only changes on the tick a point is made
        let winner = scorer.and_then(|_| self.score.winner(self.config.win_score));
        if let Some(winner) = winner {
            self.phase = MatchPhase::GameOver { winner };
            self.events.push(GameEvent::MatchWon(winner));
            tracing::info!(
                winner = winner_label(winner),
                player = self.score.player,
                ai = self.score.ai,
                tick = self.tick,
                "match over"
            );
        }

        &self.events
    }

    /// Start a new match to `max_score` points
    ///
    /// Paddles keep their positions; only scores, phase and ball are reset.
    pub fn request_replay(&mut self, max_score: u32) {
        debug_assert!(max_score > 0, "a match needs a positive win score");

        self.config.win_score = max_score;
        self.score.reset();
        self.phase = MatchPhase::Playing;
        self.events.clear();

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.field, &self.config, &mut self.rng);
        }

        tracing::info!(win_score = max_score, "replay requested");
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            player_paddle: self.paddle(Side::Player).bounding_box(),
            ai_paddle: self.paddle(Side::Ai).bounding_box(),
            ball: self.ball().bounding_box(),
            player_score: self.score.player,
            ai_score: self.score.ai,
            max_score: self.config.win_score,
            game_over: self.is_game_over(),
            winner: self.winner_label(),
            tick: self.tick,
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        *self
            .world
            .get::<&Paddle>(entity)
            .expect("controller never despawns its paddles")
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("controller never despawns its ball")
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.config.win_score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner().map(winner_label)
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> Playfield {
        self.field
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
