//! Kinematic integration system.
//!
//! Advances every active threat by `dt` (position += velocity * dt), which
//! also records the new position at the front of its trail.

use hecs::World;

use vision_core::components::ThreatId;

use crate::interfaces::RenderSink;
use crate::threat::Threat;

/// Advance all threats and notify the sink of each new position.
pub fn run<S: RenderSink + ?Sized>(world: &mut World, dt: f64, sink: &mut S) {
    for (_entity, (id, threat)) in world.query_mut::<(&ThreatId, &mut Threat)>() {
        threat.advance(dt);
        sink.threat_advanced(*id, threat);
    }
}
