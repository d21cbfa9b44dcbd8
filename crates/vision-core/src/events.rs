//! Events emitted by the simulation for the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::components::ThreatId;
use crate::types::{Position, Velocity};

/// A dwell completed at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireEvent {
    pub position: Position,
}

/// Lifecycle notifications produced during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The dwell trigger fired.
    Fired { position: Position, tick: u64 },
    /// A threat entered the play area.
    ThreatSpawned {
        id: ThreatId,
        tag: String,
        position: Position,
        target: Position,
        velocity: Velocity,
    },
    /// A threat reached the bottom edge and was removed.
    ThreatExpired { id: ThreatId, position: Position },
}
