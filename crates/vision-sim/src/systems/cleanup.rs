//! Cleanup system: removes threats that reached the bottom boundary.

use hecs::{Entity, World};

use vision_core::components::ThreatId;
use vision_core::events::SimEvent;
use vision_core::state::ScoreView;

use crate::interfaces::RenderSink;
use crate::threat::Threat;

/// Mark expired threats, then despawn them.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run<S: RenderSink + ?Sized>(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    sink: &mut S,
) {
    despawn_buffer.clear();

    for (entity, (id, threat)) in world.query_mut::<(&ThreatId, &Threat)>() {
        if threat.is_expired() {
            events.push(SimEvent::ThreatExpired {
                id: *id,
                position: threat.position(),
            });
            sink.threat_expired(*id, threat);
            tracing::debug!(%id, "threat expired");
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            score.threats_expired += 1;
        }
    }
}
