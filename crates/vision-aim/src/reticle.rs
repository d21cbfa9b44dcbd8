//! Dual-rate reticle: a fast element pinned to the pointer and a slow
//! element that chases it with exponential smoothing.

use glam::DVec2;

use vision_core::enums::SmoothingMode;
use vision_core::types::Position;

/// Both reticle positions after an update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReticleState {
    /// Latest pointer sample, unsmoothed.
    pub fast: Position,
    /// Lagging position approaching `fast`.
    pub slow: Position,
}

/// Tracks the fast and slow aim positions from sampled pointer input.
#[derive(Debug, Clone)]
pub struct ReticleTracker {
    state: ReticleState,
    smoothing_factor: f64,
    mode: SmoothingMode,
}

impl ReticleTracker {
    /// Both elements start at `origin`.
    pub fn new(origin: Position, smoothing_factor: f64, mode: SmoothingMode) -> Self {
        debug_assert!(smoothing_factor > 0.0 && smoothing_factor <= 1.0);
        Self {
            state: ReticleState {
                fast: origin,
                slow: origin,
            },
            smoothing_factor,
            mode,
        }
    }

    /// Feed one pointer sample.
    ///
    /// `fast` jumps straight to the pointer. `slow` closes a fixed fraction of
    /// the remaining gap, so it approaches asymptotically and never overshoots.
    pub fn update(&mut self, pointer: Position, dt: f64) -> ReticleState {
        debug_assert!(pointer.is_finite(), "non-finite pointer sample {pointer:?}");
        let alpha = self.effective_factor(dt);
        let slow: DVec2 = self.state.slow.as_dvec2().lerp(pointer.as_dvec2(), alpha);
        self.state = ReticleState {
            fast: pointer,
            slow: slow.into(),
        };
        self.state
    }

    /// Fraction of the gap closed by an update of `dt` seconds.
    pub fn effective_factor(&self, dt: f64) -> f64 {
        match self.mode {
            SmoothingMode::PerTick => self.smoothing_factor,
            SmoothingMode::TimeNormalized { reference_rate } => {
                if dt <= 0.0 {
                    return 0.0;
                }
                1.0 - (1.0 - self.smoothing_factor).powf(dt * reference_rate)
            }
        }
    }

    pub fn state(&self) -> ReticleState {
        self.state
    }

    /// Put both elements back at `origin`.
    pub fn reset(&mut self, origin: Position) {
        self.state = ReticleState {
            fast: origin,
            slow: origin,
        };
    }
}
