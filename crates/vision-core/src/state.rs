//! Simulation snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::ThreatId;
use crate::enums::DwellPhase;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete state broadcast after each processed tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub reticle: ReticleView,
    pub threats: Vec<ThreatView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// Both reticle elements plus dwell feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReticleView {
    pub fast: Position,
    pub slow: Position,
    pub dwell_phase: DwellPhase,
    /// Dwell completion (0.0 - 1.0) for the progress ring.
    pub dwell_progress: f64,
}

/// An active threat on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatView {
    pub id: ThreatId,
    pub tag: String,
    pub position: Position,
    pub velocity: Velocity,
    /// Recent positions, newest first.
    pub trail: Vec<Position>,
}

/// Running counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub threats_spawned: u32,
    pub threats_expired: u32,
    pub shots_fired: u32,
}
