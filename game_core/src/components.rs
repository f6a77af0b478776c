use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::map::{Aabb, Playfield};
use crate::resources::GameEvent;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Player, // Left
    Ai,     // Right
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleControl {
    Manual,
    Tracking,
}

/// Resolved directional input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    Up,
    Down,
    #[default]
    None,
}

impl Intent {
    /// Resolve held keys; holding both cancels out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Intent::Up,
            (false, true) => Intent::Down,
            _ => Intent::None,
        }
    }

    /// Signed step in screen space (y grows downward)
    pub fn delta(self, step: f32) -> f32 {
        match self {
            Intent::Up => -step,
            Intent::Down => step,
            Intent::None => 0.0,
        }
    }
}

/// Paddle component - a rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // Top edge, kept in [0, field_height - height]
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, top_left: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            x: top_left.x,
            y: top_left.y,
            width,
            height,
        }
    }

    pub fn from_config(side: Side, config: &Config) -> Self {
        let field = Playfield::from_config(config);
        Self::new(
            side,
            field.paddle_spawn(side, config),
            config.paddle_width,
            config.paddle_height,
        )
    }

    /// Shift by `delta_y`, then clamp into the field
    pub fn move_by(&mut self, delta_y: f32, field_height: f32) {
        let max_y = (field_height - self.height).max(0.0);
        self.y = (self.y + delta_y).clamp(0.0, max_y);
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Step toward the ball's current height, one `speed` per call.
    ///
    /// Purely reactive: no prediction, no dead zone beyond exact alignment.
    pub fn auto_track(&mut self, ball: &Ball, field_height: f32, speed: f32) {
        let center = self.center_y();
        let target = ball.center().y;

        if target < center {
            self.move_by(-speed, field_height);
        } else if target > center {
            self.move_by(speed, field_height);
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Pixels per tick
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Advance one tick and reflect off the top or bottom wall.
    ///
    /// The side walls are not walls for the ball; leaving through them is a point.
    pub fn advance(&mut self, field_height: f32) -> Option<GameEvent> {
        self.pos += self.vel;

        let floor = (field_height - self.size).max(0.0);
        let mut bounced = false;

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            if self.vel.y < 0.0 {
                self.vel.y = -self.vel.y;
                bounced = true;
            }
        } else if self.pos.y >= floor {
            self.pos.y = floor;
            if self.vel.y > 0.0 {
                self.vel.y = -self.vel.y;
                bounced = true;
            }
        }

        bounced.then_some(GameEvent::WallBounce)
    }

    /// Reflect off whichever paddle the ball overlaps.
    ///
    /// A paddle only returns a ball travelling toward it, and the ball is left
    /// flush against the paddle's inner face, so consecutive calls never
    /// reflect twice.
    pub fn check_collision(
        &mut self,
        player: &Paddle,
        ai: &Paddle,
        max_bounce_dy: f32,
    ) -> Option<GameEvent> {
        let ball_box = self.bounding_box();

        for paddle in [player, ai] {
            if !ball_box.intersects(&paddle.bounding_box()) {
                continue;
            }

            let approaching = match paddle.side {
                Side::Player => self.vel.x < 0.0,
                Side::Ai => self.vel.x > 0.0,
            };
            if !approaching {
                continue;
            }

            // Where on the paddle the ball hit, from -1 (top) to 1 (bottom)
            let half_height = paddle.height / 2.0;
            let offset = ((self.center().y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);

            self.vel.x = -self.vel.x;
            self.vel.y = offset * max_bounce_dy;

            self.pos.x = match paddle.side {
                Side::Player => paddle.x + paddle.width,
                Side::Ai => paddle.x - self.size,
            };

            return Some(GameEvent::PaddleHit(paddle.side));
        }

        None
    }

    /// Serve from the center.
    ///
    /// `ball_speed` is the horizontal component (`dx = ±ball_speed`, coin flip);
    /// `dy` is drawn from the serve range with a random sign, so the full speed
    /// is slightly above `ball_speed`.
    pub fn reset<R: Rng + ?Sized>(&mut self, field: &Playfield, config: &Config, rng: &mut R) {
        self.pos = field.center() - Vec2::splat(self.size / 2.0);

        let dx = if rng.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let dy_magnitude = rng.gen_range(config.serve_dy_min..=config.serve_dy_max);
        let dy = if rng.gen_bool(0.5) {
            dy_magnitude
        } else {
            -dy_magnitude
        };

        self.vel = Vec2::new(dx, dy);
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    const HEIGHT: f32 = 600.0;

    fn paddle(side: Side, y: f32) -> Paddle {
        let config = Config::new();
        let x = config.paddle_x(side);
        Paddle::new(side, Vec2::new(x, y), config.paddle_width, config.paddle_height)
    }

    #[test]
    fn test_paddle_move_clamps_top() {
        let mut p = paddle(Side::Player, 5.0);
        p.move_by(-10.0, HEIGHT);
        assert_eq!(p.y, 0.0, "Paddle should stop at the top wall");
    }

    #[test]
    fn test_paddle_move_clamps_bottom() {
        let mut p = paddle(Side::Player, 495.0);
        p.move_by(10.0, HEIGHT);
        assert_eq!(p.y, HEIGHT - p.height, "Paddle should stop at the bottom wall");
    }

    #[test]
    fn test_paddle_move_within_bounds() {
        let mut p = paddle(Side::Player, 250.0);
        p.move_by(-10.0, HEIGHT);
        assert_eq!(p.y, 240.0);
        p.move_by(20.0, HEIGHT);
        assert_eq!(p.y, 260.0);
    }

    #[test]
    fn test_auto_track_moves_down_toward_ball_below() {
        // Paddle center at 300, ball center 50 below it
        let mut p = paddle(Side::Ai, 250.0);
        let ball = Ball::new(Vec2::new(400.0, 350.0 - 3.5), Vec2::ZERO, 7.0);

        p.auto_track(&ball, HEIGHT, 5.0);

        assert_eq!(p.y, 255.0, "Paddle should move down by exactly one step");
    }

    #[test]
    fn test_auto_track_moves_up_toward_ball_above() {
        let mut p = paddle(Side::Ai, 250.0);
        let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::ZERO, 7.0);

        p.auto_track(&ball, HEIGHT, 5.0);

        assert_eq!(p.y, 245.0, "Paddle should move up by exactly one step");
    }

    #[test]
    fn test_auto_track_holds_when_aligned() {
        let mut p = paddle(Side::Ai, 250.0);
        let ball = Ball::new(Vec2::new(400.0, 300.0 - 3.5), Vec2::ZERO, 7.0);

        p.auto_track(&ball, HEIGHT, 5.0);

        assert_eq!(p.y, 250.0, "Paddle should not move when centered on the ball");
    }

    #[test]
    fn test_auto_track_respects_bounds() {
        let mut p = paddle(Side::Ai, 2.0);
        let ball = Ball::new(Vec2::new(400.0, 0.0), Vec2::ZERO, 7.0);

        p.auto_track(&ball, HEIGHT, 5.0);

        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut ball = Ball::new(Vec2::new(400.0, 2.0), Vec2::new(5.0, -3.0), 7.0);

        let event = ball.advance(HEIGHT);

        assert_eq!(event, Some(GameEvent::WallBounce));
        assert_eq!(ball.vel, Vec2::new(5.0, 3.0), "Only dy should flip");
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the wall");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut ball = Ball::new(Vec2::new(400.0, 590.0), Vec2::new(-5.0, 4.0), 7.0);

        let event = ball.advance(HEIGHT);

        assert_eq!(event, Some(GameEvent::WallBounce));
        assert_eq!(ball.vel, Vec2::new(-5.0, -4.0));
        assert_eq!(ball.pos.y, HEIGHT - 7.0);
    }

    #[test]
    fn test_ball_moves_freely_in_open_field() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, -3.0), 7.0);

        assert_eq!(ball.advance(HEIGHT), None);
        assert_eq!(ball.pos, Vec2::new(405.0, 297.0));
    }

    #[test]
    fn test_ball_passes_side_boundaries() {
        let mut ball = Ball::new(Vec2::new(2.0, 300.0), Vec2::new(-5.0, 0.0), 7.0);

        assert_eq!(ball.advance(HEIGHT), None);
        assert_eq!(ball.pos.x, -3.0, "Side edges are scoring lines, not walls");
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);
        let mut ball = Ball::new(Vec2::new(18.0, 296.5), Vec2::new(-5.0, 2.0), 7.0);

        let event = ball.check_collision(&player, &ai, 6.0);

        assert_eq!(event, Some(GameEvent::PaddleHit(Side::Player)));
        assert_eq!(ball.vel.x, 5.0, "Ball should head right after the left paddle");
        assert_eq!(ball.pos.x, player.x + player.width, "Ball should sit on the paddle face");
    }

    #[test]
    fn test_ball_collides_with_ai_paddle() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);
        let mut ball = Ball::new(Vec2::new(776.0, 296.5), Vec2::new(5.0, 0.0), 7.0);

        let event = ball.check_collision(&player, &ai, 6.0);

        assert_eq!(event, Some(GameEvent::PaddleHit(Side::Ai)));
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.pos.x, ai.x - ball.size);
    }

    #[test]
    fn test_collision_does_not_double_reflect() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);
        let start = Ball::new(Vec2::new(15.0, 296.5), Vec2::new(-5.0, 0.0), 7.0);

        let mut ball = start;
        assert!(ball.check_collision(&player, &ai, 6.0).is_some());
        assert!(ball.check_collision(&player, &ai, 6.0).is_none());
        assert_eq!(ball.vel.x, 5.0);

        // Still overlapping but already reflected: no second flip
        ball.pos = start.pos;
        assert!(ball.check_collision(&player, &ai, 6.0).is_none());
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_hit_position_sets_vertical_speed() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);

        // Near the top edge: deflect upward
        let mut ball = Ball::new(Vec2::new(18.0, 250.0), Vec2::new(-5.0, 0.0), 7.0);
        ball.check_collision(&player, &ai, 6.0);
        assert!(ball.vel.y < 0.0, "Top-edge hit should send the ball up");

        // Near the bottom edge: deflect downward
        let mut ball = Ball::new(Vec2::new(18.0, 343.0), Vec2::new(-5.0, 0.0), 7.0);
        ball.check_collision(&player, &ai, 6.0);
        assert!(ball.vel.y > 0.0, "Bottom-edge hit should send the ball down");

        // Dead center: flat return
        let mut ball = Ball::new(Vec2::new(18.0, 296.5), Vec2::new(-5.0, 3.0), 7.0);
        ball.check_collision(&player, &ai, 6.0);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_vertical_speed_capped_at_paddle_corner() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);
        let mut ball = Ball::new(Vec2::new(18.0, 245.0), Vec2::new(-5.0, 0.0), 7.0);

        ball.check_collision(&player, &ai, 6.0);

        assert_eq!(ball.vel.y, -6.0);
    }

    #[test]
    fn test_no_collision_when_moving_away() {
        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);
        let mut ball = Ball::new(Vec2::new(18.0, 296.5), Vec2::new(5.0, 0.0), 7.0);

        assert!(ball.check_collision(&player, &ai, 6.0).is_none());
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_no_collision_when_ball_misses_paddle() {
        let player = paddle(Side::Player, 0.0);
        let ai = paddle(Side::Ai, 0.0);
        let mut ball = Ball::new(Vec2::new(18.0, 400.0), Vec2::new(-5.0, 0.0), 7.0);

        assert!(ball.check_collision(&player, &ai, 6.0).is_none());
    }

    #[test]
    fn test_reset_serves_from_center_at_configured_speed() {
        let config = Config::new();
        let field = Playfield::from_config(&config);
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-10.0, 40.0), Vec2::ZERO, config.ball_size);

        ball.reset(&field, &config, &mut rng);

        assert_eq!(ball.center(), field.center());
        assert_eq!(ball.vel.x.abs(), config.ball_speed);
        assert!(ball.vel.y.abs() >= config.serve_dy_min);
        assert!(ball.vel.y.abs() <= config.serve_dy_max);
    }

    #[test]
    fn test_reset_direction_roughly_even() {
        let config = Config::new();
        let field = Playfield::from_config(&config);
        let mut rng = GameRng::new(2024);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);

        let mut rightward = 0;
        for _ in 0..100 {
            ball.reset(&field, &config, &mut rng);
            if ball.vel.x > 0.0 {
                rightward += 1;
            }
        }

        assert!(
            (25..=75).contains(&rightward),
            "Serve direction should be close to an even split, got {} of 100 rightward",
            rightward
        );
    }

    #[test]
    fn test_fastest_valid_ball_cannot_skip_paddle() {
        let config = Config {
            ball_speed: 16.9,
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let player = paddle(Side::Player, 250.0);
        let ai = paddle(Side::Ai, 250.0);

        // Anywhere in front of the face, one step lands on the paddle
        for start_x in [20.0, 25.0, 30.0, 36.8] {
            let mut ball = Ball::new(
                Vec2::new(start_x, 296.5),
                Vec2::new(-config.ball_speed, 0.0),
                config.ball_size,
            );
            ball.advance(HEIGHT);
            let hit = ball.check_collision(&player, &ai, config.max_bounce_dy);
            assert_eq!(
                hit,
                Some(GameEvent::PaddleHit(Side::Player)),
                "Ball starting at x = {} passed through",
                start_x
            );
        }
    }

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(Intent::from_keys(true, false), Intent::Up);
        assert_eq!(Intent::from_keys(false, true), Intent::Down);
        assert_eq!(Intent::from_keys(true, true), Intent::None);
        assert_eq!(Intent::from_keys(false, false), Intent::None);
        assert_eq!(Intent::Up.delta(10.0), -10.0);
        assert_eq!(Intent::None.delta(10.0), 0.0);
    }
}
