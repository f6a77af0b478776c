use hecs::World;
use rand::Rng;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::map::Playfield;
use crate::resources::{Events, GameEvent, Score};

/// Check if ball left the field through a side edge (scoring)
///
/// Returns the side that took the point. At most one side scores per call.
pub fn check_scoring<R: Rng + ?Sized>(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if ball.pos.x <= 0.0 {
            Side::Ai // Player missed on the left
        } else if ball.pos.x >= field.width {
            Side::Player // AI missed on the right
        } else {
            continue;
        };

        score.increment(side);
        events.push(GameEvent::Scored(side));
        ball.reset(field, config, rng);

        tracing::debug!(
            scorer = ?side,
            player = score.player,
            ai = score.ai,
            serve_dx = ball.vel.x,
            "point scored"
        );
        scorer = Some(side);
    }

    scorer
}
