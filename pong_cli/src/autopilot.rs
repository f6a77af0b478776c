//! Stand-in for the keyboard: steers the player's paddle

use game_core::{Ball, Intent, Paddle, Playfield};

/// Scripted player input
///
/// Strategy:
/// 1. If the ball is coming toward us, predict where it crosses our paddle
///    face, folding in wall bounces.
/// 2. If it is moving away, drift back to the middle.
/// 3. Only move when the target is outside the dead zone.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub deadzone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { deadzone: 12.0 }
    }
}

impl Autopilot {
    pub fn decide(&self, ball: &Ball, paddle: &Paddle, field: &Playfield) -> Intent {
        let target = if ball.vel.x < 0.0 {
            let face_x = paddle.x + paddle.width;
            let ticks = ((ball.pos.x - face_x) / -ball.vel.x).max(0.0);
            let predicted = ball.center().y + ball.vel.y * ticks;
            fold_into(predicted, ball.size / 2.0, field.height - ball.size / 2.0)
        } else {
            field.center().y
        };

        let diff = target - paddle.center_y();
        if diff > self.deadzone {
            Intent::Down
        } else if diff < -self.deadzone {
            Intent::Up
        } else {
            Intent::None
        }
    }
}

/// Reflect `y` back into `[min, max]` the way the walls would
fn fold_into(mut y: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    // Each pass removes at least one reflection
    for _ in 0..64 {
        if y < min {
            y = 2.0 * min - y;
        } else if y > max {
            y = 2.0 * max - y;
        } else {
            break;
        }
    }
    y.clamp(min, max)
}
