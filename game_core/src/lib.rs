pub mod audio;
pub mod components;
pub mod config;
pub mod controller;
pub mod map;
pub mod menu;
pub mod params;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use controller::*;
pub use map::*;
pub use menu::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use rand::Rng;
use systems::*;

/// Run one tick of the Pong simulation
///
/// The order is fixed: a collision on the same tick as a side exit is
/// resolved before the point is counted.
pub fn step<R: Rng + ?Sized>(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) -> Option<Side> {
    // 1. Move ball (walls bounce)
    move_ball(world, field, events);

    // 2. Check collisions (ball vs paddles)
    check_collisions(world, config, events);

    // 3. Opponent reacts to the ball's new position
    track_ball(world, field, config);

    // 4. Check scoring (ball exited through a side)
    check_scoring(world, field, config, score, events, rng)
}

/// Helper to create a paddle entity at its side's starting spot
pub fn create_paddle(
    world: &mut World,
    side: Side,
    control: PaddleControl,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::from_config(side, config), control))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
