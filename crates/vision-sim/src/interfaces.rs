//! Collaborator seams: where pointer input comes from and where
//! per-tick results go.

use std::collections::VecDeque;

use vision_aim::dwell::DwellState;
use vision_aim::reticle::ReticleState;
use vision_core::components::ThreatId;
use vision_core::events::FireEvent;
use vision_core::types::Position;

use crate::threat::Threat;

/// Supplies the pointer position in simulation coordinates.
///
/// Any device → view → scene transform happens on the host side.
pub trait PointerSampler {
    /// `None` when no sample is available (e.g. before the first pointer event).
    fn current_position(&mut self) -> Option<Position>;
}

/// A pointer parked at one spot.
impl PointerSampler for Position {
    fn current_position(&mut self) -> Option<Position> {
        Some(*self)
    }
}

impl PointerSampler for Option<Position> {
    fn current_position(&mut self) -> Option<Position> {
        *self
    }
}

/// Plays back a queue of samples, then keeps returning the final one.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    samples: VecDeque<Option<Position>>,
    last: Option<Position>,
}

impl ScriptedPointer {
    pub fn new(samples: impl IntoIterator<Item = Option<Position>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            last: None,
        }
    }

    /// Append `count` copies of `sample`.
    pub fn hold(mut self, sample: Position, count: usize) -> Self {
        self.samples.extend(std::iter::repeat(Some(sample)).take(count));
        self
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl PointerSampler for ScriptedPointer {
    fn current_position(&mut self) -> Option<Position> {
        match self.samples.pop_front() {
            Some(sample) => {
                if sample.is_some() {
                    self.last = sample;
                }
                sample
            }
            None => self.last,
        }
    }
}

/// Receives per-tick notifications for drawing. Every method defaults to a no-op.
///
/// Cosmetic sequencing (flashes, fades, pulses) belongs to the implementor.
pub trait RenderSink {
    /// Reticle positions and dwell state after the reticle/trigger update.
    fn reticle(&mut self, _reticle: &ReticleState, _dwell: &DwellState) {}
    fn fired(&mut self, _event: &FireEvent) {}
    fn threat_spawned(&mut self, _id: ThreatId, _threat: &Threat) {}
    fn threat_advanced(&mut self, _id: ThreatId, _threat: &Threat) {}
    /// Called once per threat, just before it is removed.
    fn threat_expired(&mut self, _id: ThreatId, _threat: &Threat) {}
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {}
