//! Simulation configuration and load-time validation.
//!
//! A config is validated once when it is loaded or handed to the engine.
//! Invalid values are rejected with a descriptive error; nothing is clamped
//! while the simulation runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::ThreatSpec;
use crate::constants::*;
use crate::enums::{AimSource, SmoothingMode};

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        range: &'static str,
        value: f64,
    },
    #[error("missile catalog is empty")]
    EmptyCatalog,
    #[error("missile type #{index} ({tag:?}) has invalid speed {speed}")]
    InvalidMissile {
        index: usize,
        tag: String,
        speed: f64,
    },
    #[error("spawn margin {margin} leaves no room in a play area {width} wide")]
    MarginTooLarge { margin: f64, width: f64 },
    #[error("max_trail_length must be at least 1")]
    ZeroTrailLength,
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extent of the play area. Threats spawn at `y = height` and expire at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// Fraction of the gap the slow reticle closes per tick, in (0, 1].
    pub smoothing_factor: f64,
    pub smoothing_mode: SmoothingMode,
    /// Reticle position that drives the dwell trigger.
    pub aim_source: AimSource,
    /// Seconds of steady aim needed to fire.
    pub dwell_duration: f64,
    pub dwell_movement_tolerance: f64,
    pub refire_distance_threshold: f64,
    /// Seconds between threat spawns.
    pub spawn_interval: f64,
    /// Spawn the first threat on the first tick instead of after one interval.
    pub spawn_on_start: bool,
    pub spawn_margin: f64,
    pub max_trail_length: usize,
    pub missile_catalog: Vec<ThreatSpec>,
    pub play_area: PlayArea,
    /// Host frames closer together than `1 / cap` seconds are skipped.
    /// `None` processes every frame; written as `tick_rate_cap = 0` in TOML.
    #[serde(with = "cap_or_uncapped")]
    pub tick_rate_cap: Option<f64>,
    /// Step rate for `SimulationEngine::step`.
    pub fixed_tick_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            smoothing_factor: SMOOTHING_FACTOR,
            smoothing_mode: SmoothingMode::default(),
            aim_source: AimSource::default(),
            dwell_duration: DWELL_DURATION_SECS,
            dwell_movement_tolerance: DWELL_MOVEMENT_TOLERANCE,
            refire_distance_threshold: REFIRE_DISTANCE_THRESHOLD,
            spawn_interval: SPAWN_INTERVAL_SECS,
            spawn_on_start: false,
            spawn_margin: SPAWN_MARGIN,
            max_trail_length: MAX_TRAIL_LENGTH,
            missile_catalog: MISSILE_CATALOG
                .iter()
                .map(|&(tag, speed)| ThreatSpec::new(tag, speed))
                .collect(),
            play_area: PlayArea::default(),
            tick_rate_cap: Some(TICK_RATE_CAP),
            fixed_tick_rate: FIXED_TICK_RATE,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document and validate it. Missing keys take reference values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every field. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = self.smoothing_factor;
        finite("smoothing_factor", f)?;
        if f <= 0.0 || f > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "smoothing_factor",
                range: "(0, 1]",
                value: f,
            });
        }
        if let SmoothingMode::TimeNormalized { reference_rate } = self.smoothing_mode {
            positive("smoothing_mode.reference_rate", reference_rate)?;
        }

        positive("dwell_duration", self.dwell_duration)?;
        non_negative("dwell_movement_tolerance", self.dwell_movement_tolerance)?;
        non_negative("refire_distance_threshold", self.refire_distance_threshold)?;
        positive("spawn_interval", self.spawn_interval)?;

        positive("play_area.width", self.play_area.width)?;
        positive("play_area.height", self.play_area.height)?;
        non_negative("spawn_margin", self.spawn_margin)?;
        if self.spawn_margin * 2.0 > self.play_area.width {
            return Err(ConfigError::MarginTooLarge {
                margin: self.spawn_margin,
                width: self.play_area.width,
            });
        }

        if self.max_trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        if self.missile_catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, spec) in self.missile_catalog.iter().enumerate() {
            if !spec.speed.is_finite() || spec.speed <= 0.0 {
                return Err(ConfigError::InvalidMissile {
                    index,
                    tag: spec.tag.clone(),
                    speed: spec.speed,
                });
            }
        }

        if let Some(cap) = self.tick_rate_cap {
            positive("tick_rate_cap", cap)?;
        }
        positive("fixed_tick_rate", self.fixed_tick_rate)?;
        Ok(())
    }

    /// Minimum seconds between processed host frames, if throttled.
    pub fn min_frame_interval(&self) -> Option<f64> {
        self.tick_rate_cap.map(|cap| 1.0 / cap)
    }

    /// Seconds per fixed step.
    pub fn fixed_dt(&self) -> f64 {
        1.0 / self.fixed_tick_rate
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// On disk a tick-rate cap of `0` means uncapped.
mod cap_or_uncapped {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cap: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(cap.unwrap_or(0.0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let cap = f64::deserialize(deserializer)?;
        Ok((cap != 0.0).then_some(cap))
    }
}
