use serde::Deserialize;
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] default, so a partial file
/// deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_step: f32,
    pub tracking_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub serve_dy_min: f32,
    pub serve_dy_max: f32,
    pub max_bounce_dy: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_step: Params::PLAYER_STEP,
            tracking_speed: Params::TRACKING_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            serve_dy_min: Params::SERVE_DY_MIN,
            serve_dy_max: Params::SERVE_DY_MAX,
            max_bounce_dy: Params::MAX_BOUNCE_DY,
            win_score: Params::WIN_SCORE,
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be a positive finite number")]
    NotPositive(&'static str),

    #[error("win score must be at least 1")]
    ZeroWinScore,

    #[error("paddle height {paddle} does not fit in a field {field} high")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("ball of size {ball} does not fit between the paddles")]
    BallTooLarge { ball: f32 },

    #[error("{name} {speed} would carry the ball through a paddle in one tick (limit {limit})")]
    TooFast {
        name: &'static str,
        speed: f32,
        limit: f32,
    },

    #[error("serve range {min}..={max} is empty")]
    EmptyServeRange { min: f32, max: f32 },
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values a match cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_step", self.player_step),
            ("tracking_speed", self.tracking_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("serve_dy_min", self.serve_dy_min),
            ("max_bounce_dy", self.max_bounce_dy),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive(name));
            }
        }

        if !(self.paddle_inset.is_finite() && self.paddle_inset >= 0.0) {
            return Err(ConfigError::NotPositive("paddle_inset"));
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }

        let gap = self.paddle_x(Side::Ai) - (self.paddle_x(Side::Player) + self.paddle_width);
        if self.ball_size >= gap || self.ball_size >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
            });
        }

        if self.serve_dy_max.is_nan() || self.serve_dy_max < self.serve_dy_min {
            return Err(ConfigError::EmptyServeRange {
                min: self.serve_dy_min,
                max: self.serve_dy_max,
            });
        }

        // A ball overlaps a paddle across a span of paddle size plus ball size;
        // any per-tick step at least that long can skip over it.
        let limits = [
            ("ball_speed", self.ball_speed, self.paddle_width + self.ball_size),
            ("max_bounce_dy", self.max_bounce_dy, self.paddle_height + self.ball_size),
        ];
        for (name, speed, limit) in limits {
            if speed >= limit {
                return Err(ConfigError::TooFast { name, speed, limit });
            }
        }

        Ok(())
    }

    /// Get the left edge X of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Ai => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }
}
