//! Entity spawn factories for the simulation world.

use hecs::{Entity, World};

use vision_core::components::{ThreatId, ThreatSpec};
use vision_core::types::Position;

use crate::threat::Threat;

/// Hand out the next threat id.
pub fn allocate_threat_id(next_id: &mut u32) -> ThreatId {
    let id = ThreatId(*next_id);
    *next_id += 1;
    id
}

/// Insert a threat entity under an already allocated id.
pub fn spawn_threat(world: &mut World, id: ThreatId, threat: Threat) -> Entity {
    world.spawn((id, threat))
}

/// Build and insert a threat flying from `spawn` to `target`.
/// Used for scripted scenarios that bypass the random spawner.
pub fn spawn_threat_between(
    world: &mut World,
    next_id: &mut u32,
    spec: ThreatSpec,
    spawn: Position,
    target: Position,
    max_trail_length: usize,
) -> (Entity, ThreatId) {
    let id = allocate_threat_id(next_id);
    let threat = Threat::new(spec, spawn, target, max_trail_length);
    (spawn_threat(world, id, threat), id)
}
