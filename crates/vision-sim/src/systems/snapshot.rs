//! Snapshot system: queries the world and builds a complete SimSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use vision_aim::dwell::DwellTrigger;
use vision_aim::reticle::ReticleState;
use vision_core::components::ThreatId;
use vision_core::events::SimEvent;
use vision_core::state::{ReticleView, ScoreView, SimSnapshot, ThreatView};
use vision_core::types::SimTime;

use crate::threat::Threat;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    reticle: &ReticleState,
    dwell: &DwellTrigger,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        reticle: ReticleView {
            fast: reticle.fast,
            slow: reticle.slow,
            dwell_phase: dwell.state().phase,
            dwell_progress: dwell.progress(),
        },
        threats: build_threats(world),
        events,
        score: *score,
    }
}

/// ThreatView list ordered by id so output does not depend on storage order.
pub fn build_threats(world: &World) -> Vec<ThreatView> {
    let mut views: Vec<ThreatView> = world
        .query::<(&ThreatId, &Threat)>()
        .iter()
        .map(|(_entity, (id, threat))| ThreatView {
            id: *id,
            tag: threat.spec().tag.clone(),
            position: threat.position(),
            velocity: threat.velocity(),
            trail: threat.trail().copied().collect(),
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}
