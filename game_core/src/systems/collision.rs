use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Check ball collisions with both paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy the paddles out first so the ball can be borrowed mutably
    let mut player = None;
    let mut ai = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player = Some(*paddle),
            Side::Ai => ai = Some(*paddle),
        }
    }

    let (player, ai) = match (player, ai) {
        (Some(player), Some(ai)) => (player, ai),
        _ => return, // Not a full match yet
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(hit) = ball.check_collision(&player, &ai, config.max_bounce_dy) {
            tracing::trace!(?hit, x = ball.pos.x, dy = ball.vel.y, "paddle hit");
            events.push(hit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameEvent, PaddleControl};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, PaddleControl::Manual, &config);
        create_paddle(&mut world, Side::Ai, PaddleControl::Tracking, &config);
        (world, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(16.0, 296.5), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, 5.0, "Ball should bounce right");
        assert!(events.contains(GameEvent::PaddleHit(Side::Player)));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(777.0, 296.5), Vec2::new(5.0, 0.0), 7.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -5.0, "Ball should bounce left");
        assert!(events.contains(GameEvent::PaddleHit(Side::Ai)));
    }

    #[test]
    fn test_second_pass_does_not_reflect_again() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(16.0, 296.5), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &config, &mut events);
        events.clear();
        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, 5.0);
        assert!(events.is_empty(), "Ball must not stick to the paddle");
    }

    #[test]
    fn test_no_collision_without_paddles() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(16.0, 296.5), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &config, &mut events);

        assert!(events.is_empty());
        assert_eq!(ball(&world).vel.x, -5.0);
    }
}
