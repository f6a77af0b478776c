use hecs::World;

use crate::components::{Ball, Paddle, PaddleControl};
use crate::config::Config;
use crate::map::Playfield;

/// Let tracking paddles react to where the ball is now
pub fn track_ball(world: &mut World, field: &Playfield, config: &Config) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &PaddleControl)>() {
        if *control == PaddleControl::Tracking {
            paddle.auto_track(&ball, field.height, config.tracking_speed);
        }
    }
}
