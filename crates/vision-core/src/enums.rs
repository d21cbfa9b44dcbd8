//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::SMOOTHING_REFERENCE_RATE;

/// Dwell trigger phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DwellPhase {
    /// Waiting for an aim point.
    #[default]
    Idle,
    /// Holding an anchor and accumulating time.
    Dwelling,
    /// Aim is still within the refire radius of the last shot.
    /// Behaves exactly like `Idle` for transitions.
    Cooldown,
}

/// Which reticle position feeds the dwell trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AimSource {
    /// Raw pointer position.
    Fast,
    /// Exponentially smoothed position.
    #[default]
    Slow,
}

/// How the smoothing factor relates to elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Factor applied once per tick regardless of dt (frame-rate coupled).
    #[default]
    PerTick,
    /// Factor rescaled by dt so the approach speed is frame-rate independent.
    /// Matches `PerTick` when ticks arrive at `reference_rate` Hz.
    TimeNormalized {
        #[serde(default = "default_reference_rate")]
        reference_rate: f64,
    },
}

fn default_reference_rate() -> f64 {
    SMOOTHING_REFERENCE_RATE
}
