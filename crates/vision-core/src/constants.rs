//! Simulation constants and tuning parameters.
//!
//! These are the reference values; `SimConfig::default()` is built from them.

/// Fixed-step tick rate (Hz) used by `SimulationEngine::step`.
pub const FIXED_TICK_RATE: f64 = 60.0;

/// Default processing cap for host frames (Hz).
pub const TICK_RATE_CAP: f64 = 30.0;

// --- Reticle ---

/// Fraction of the remaining gap the slow reticle closes per tick.
pub const SMOOTHING_FACTOR: f64 = 0.1;

/// Frame rate at which the per-tick smoothing factor was tuned.
/// Used only by the time-normalized smoothing mode.
pub const SMOOTHING_REFERENCE_RATE: f64 = 60.0;

// --- Dwell trigger ---

/// Seconds the aim must be held to fire.
pub const DWELL_DURATION_SECS: f64 = 0.4;

/// Movement (units) from the dwell anchor that restarts the dwell.
pub const DWELL_MOVEMENT_TOLERANCE: f64 = 80.0;

/// Distance (units) the aim must leave the last fired spot before it can fire again.
pub const REFIRE_DISTANCE_THRESHOLD: f64 = 100.0;

/// Slack applied when comparing accumulated dwell time against the duration.
/// Summing 1/60 s 24 times lands just under 0.4 s in f64.
pub const DWELL_TIME_EPSILON: f64 = 1e-9;

// --- Threats ---

/// Seconds between spawned threats.
pub const SPAWN_INTERVAL_SECS: f64 = 6.0;

/// Horizontal inset from the play-area edges for spawn and target points.
pub const SPAWN_MARGIN: f64 = 50.0;

/// Maximum number of trail positions kept per threat.
pub const MAX_TRAIL_LENGTH: usize = 30;

/// Play area width (units).
pub const PLAY_AREA_WIDTH: f64 = 1920.0;

/// Play area height (units).
pub const PLAY_AREA_HEIGHT: f64 = 1080.0;

/// Default catalog: (tag, speed in units/s).
pub const MISSILE_CATALOG: [(&str, f64); 3] = [("red", 80.0), ("orange", 120.0), ("yellow", 160.0)];

// --- Misc ---

/// Default RNG seed. Same seed = same spawn sequence.
pub const DEFAULT_SEED: u64 = 42;

/// Slack when comparing host frame spacing against the throttle interval.
/// 60 Hz frame timestamps summed in f64 can land a hair under 1/30 s apart.
pub const FRAME_TIME_EPSILON: f64 = 1e-6;
