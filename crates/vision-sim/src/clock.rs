//! Host-frame pacing.
//!
//! The host calls in once per rendered frame with a monotonically increasing
//! timestamp. With a cap set, frames arriving sooner than `1 / cap` seconds
//! after the last processed frame are dropped without touching any state.

use vision_core::constants::FRAME_TIME_EPSILON;

/// Converts host timestamps into simulation step lengths.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    min_interval: Option<f64>,
    last_processed: Option<f64>,
}

impl SimClock {
    /// `min_interval` of `None` processes every frame.
    pub fn new(min_interval: Option<f64>) -> Self {
        Self {
            min_interval,
            last_processed: None,
        }
    }

    /// Step length for the frame at `now`, or `None` if it should be skipped.
    ///
    /// The first frame only establishes the time base and yields a zero step.
    pub fn frame(&mut self, now: f64) -> Option<f64> {
        let Some(last) = self.last_processed else {
            self.last_processed = Some(now);
            return Some(0.0);
        };

        let elapsed = now - last;
        if elapsed < 0.0 {
            return None;
        }
        if let Some(min) = self.min_interval {
            if elapsed + FRAME_TIME_EPSILON < min {
                return None;
            }
        }
        self.last_processed = Some(now);
        Some(elapsed)
    }

    /// Timestamp of the last processed frame.
    pub fn last_processed(&self) -> Option<f64> {
        self.last_processed
    }

    /// Forget the time base; the next frame starts fresh.
    pub fn reset(&mut self) {
        self.last_processed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_zero_step() {
        let mut clock = SimClock::new(Some(1.0 / 30.0));
        assert_eq!(clock.frame(12.5), Some(0.0));
        assert_eq!(clock.last_processed(), Some(12.5));
    }

    #[test]
    fn test_throttle_skips_early_frames_without_mutation() {
        let mut clock = SimClock::new(Some(1.0 / 30.0));
        clock.frame(0.0);
        assert_eq!(clock.frame(0.01), None);
        assert_eq!(clock.frame(0.02), None);
        assert_eq!(clock.last_processed(), Some(0.0));
        let dt = clock.frame(0.04).unwrap();
        assert!((dt - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_sixty_hz_host_processes_every_other_frame() {
        let mut clock = SimClock::new(Some(1.0 / 30.0));
        let processed = (0..=60)
            .filter(|&i| clock.frame(i as f64 / 60.0).is_some())
            .count();
        // Frame 0 plus every second frame after it.
        assert_eq!(processed, 31);
    }

    #[test]
    fn test_uncapped_processes_everything() {
        let mut clock = SimClock::new(None);
        clock.frame(0.0);
        assert_eq!(clock.frame(0.001), Some(0.001));
        assert_eq!(clock.frame(0.0005), None, "time went backwards");
    }
}
