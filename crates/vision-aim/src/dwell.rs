//! Dwell-to-fire finite state machine.
//!
//! Holding the aim inside a small radius for long enough fires once at the
//! anchor point. Firing arms a distance gate: the aim has to leave the last
//! fired spot before another dwell can start.

use vision_core::constants::DWELL_TIME_EPSILON;
use vision_core::enums::DwellPhase;
use vision_core::events::FireEvent;
use vision_core::types::Position;

/// Tuning for the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellParams {
    /// Seconds of steady aim needed to fire.
    pub duration: f64,
    /// Distance from the anchor that restarts the dwell.
    pub movement_tolerance: f64,
    /// Distance from the last shot within which no dwell may start.
    pub refire_distance: f64,
}

/// Mutable trigger state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DwellState {
    pub phase: DwellPhase,
    /// Anchor of the current dwell (meaningful while `Dwelling`).
    pub dwell_start: Position,
    /// Seconds accumulated at the current anchor.
    pub dwell_elapsed: f64,
    /// Where the trigger last fired.
    pub last_fired: Option<Position>,
}

/// Consumes aim positions and elapsed time, producing fire events.
#[derive(Debug, Clone)]
pub struct DwellTrigger {
    params: DwellParams,
    state: DwellState,
}

impl DwellTrigger {
    pub fn new(params: DwellParams) -> Self {
        debug_assert!(params.duration > 0.0);
        Self {
            params,
            state: DwellState::default(),
        }
    }

    /// Advance the trigger by one tick.
    pub fn update(&mut self, aim: Position, dt: f64) -> Option<FireEvent> {
        debug_assert!(aim.is_finite(), "non-finite aim {aim:?}");
        debug_assert!(dt >= 0.0, "negative dt {dt}");

        if !self.can_fire(&aim) {
            self.state.phase = DwellPhase::Cooldown;
            self.state.dwell_elapsed = 0.0;
            return None;
        }

        match self.state.phase {
            DwellPhase::Idle | DwellPhase::Cooldown => {
                self.begin_dwell(aim);
                None
            }
            DwellPhase::Dwelling => self.continue_dwell(aim, dt),
        }
    }

    /// False while the aim is still within the refire radius of the last shot.
    pub fn can_fire(&self, aim: &Position) -> bool {
        match self.state.last_fired {
            Some(fired) => aim.distance_to(&fired) > self.params.refire_distance,
            None => true,
        }
    }

    /// Dwell completion in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.state.phase != DwellPhase::Dwelling {
            return 0.0;
        }
        (self.state.dwell_elapsed / self.params.duration).clamp(0.0, 1.0)
    }

    pub fn state(&self) -> &DwellState {
        &self.state
    }

    /// Back to the initial Idle state, forgetting the last shot.
    pub fn reset(&mut self) {
        self.state = DwellState::default();
    }

    fn begin_dwell(&mut self, aim: Position) {
        self.state.phase = DwellPhase::Dwelling;
        self.state.dwell_start = aim;
        self.state.dwell_elapsed = 0.0;
    }

    fn continue_dwell(&mut self, aim: Position, dt: f64) -> Option<FireEvent> {
        // Movement is checked before time accrues: a jump on the tick that
        // would have completed the dwell still cancels it.
        if aim.distance_to(&self.state.dwell_start) > self.params.movement_tolerance {
            self.begin_dwell(aim);
            return None;
        }

        self.state.dwell_elapsed += dt;
        if self.state.dwell_elapsed + DWELL_TIME_EPSILON < self.params.duration {
            return None;
        }

        let position = self.state.dwell_start;
        self.state.last_fired = Some(position);
        self.state.phase = DwellPhase::Idle;
        self.state.dwell_elapsed = 0.0;
        Some(FireEvent { position })
    }
}

impl From<&vision_core::config::SimConfig> for DwellParams {
    fn from(config: &vision_core::config::SimConfig) -> Self {
        Self {
            duration: config.dwell_duration,
            movement_tolerance: config.dwell_movement_tolerance,
            refire_distance: config.refire_distance_threshold,
        }
    }
}
