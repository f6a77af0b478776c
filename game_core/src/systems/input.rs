use hecs::World;

use crate::components::*;
use crate::map::Playfield;

/// Apply this tick's directional intent to manually driven paddles
pub fn apply_intent(world: &mut World, intent: Intent, step: f32, field: &Playfield) {
    let delta = intent.delta(step);
    if delta == 0.0 {
        return;
    }

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &PaddleControl)>() {
        if *control == PaddleControl::Manual {
            paddle.move_by(delta, field.height);
        }
    }
}
