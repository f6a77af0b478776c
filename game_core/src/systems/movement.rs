use hecs::World;

use crate::components::Ball;
use crate::map::Playfield;
use crate::resources::Events;

/// Move ball based on velocity, reflecting off the top and bottom walls
pub fn move_ball(world: &mut World, field: &Playfield, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        events.extend(ball.advance(field.height));
    }
}
