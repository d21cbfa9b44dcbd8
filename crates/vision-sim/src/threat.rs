//! Threat kinematics: straight-line flight with a bounded position trail.

use std::collections::VecDeque;

use glam::DVec2;

use vision_core::components::ThreatSpec;
use vision_core::types::{Position, Velocity};

/// A missile flying from its spawn point toward a target on the bottom edge.
///
/// Plain data plus behavior; the renderer owns whatever drawable represents it.
#[derive(Debug, Clone, PartialEq)]
pub struct Threat {
    position: Position,
    target: Position,
    velocity: Velocity,
    /// Recent positions, newest first.
    trail: VecDeque<Position>,
    max_trail_length: usize,
    spec: ThreatSpec,
}

impl Threat {
    /// Velocity is fixed here: unit direction spawn → target scaled by the
    /// spec speed. Coincident spawn and target fall back to straight down.
    pub fn new(spec: ThreatSpec, spawn: Position, target: Position, max_trail_length: usize) -> Self {
        debug_assert!(max_trail_length > 0);
        debug_assert!(spawn.is_finite() && target.is_finite());

        let mut direction = (target.as_dvec2() - spawn.as_dvec2()).normalize_or_zero();
        if direction == DVec2::ZERO {
            direction = DVec2::NEG_Y;
        }
        let velocity = Velocity::from(direction * spec.speed);

        Self {
            position: spawn,
            target,
            velocity,
            trail: VecDeque::with_capacity(max_trail_length + 1),
            max_trail_length,
            spec,
        }
    }

    /// Integrate one step and record the new position at the trail front.
    /// Expired threats stay where they are.
    pub fn advance(&mut self, dt: f64) {
        if self.is_expired() {
            return;
        }
        let next = self.position.as_dvec2() + self.velocity.as_dvec2() * dt;
        self.position = next.into();

        self.trail.push_front(self.position);
        while self.trail.len() > self.max_trail_length {
            self.trail.pop_back();
        }
        debug_assert!(self.trail.len() <= self.max_trail_length);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// True once the threat has reached the bottom boundary.
    pub fn is_expired(&self) -> bool {
        self.position.y <= 0.0
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn spec(&self) -> &ThreatSpec {
        &self.spec
    }

    /// Newest first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Seconds until `y <= 0` at the current velocity, if it is descending.
    pub fn time_to_expiry(&self) -> Option<f64> {
        if self.is_expired() {
            return Some(0.0);
        }
        (self.velocity.y < 0.0).then(|| self.position.y / -self.velocity.y)
    }
}
