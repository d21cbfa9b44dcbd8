//! ECS components for hecs entities.
//!
//! Plain data shared between the engine and its observers.

use serde::{Deserialize, Serialize};

/// Stable identifier of a threat, assigned at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreatId(pub u32);

/// A missile type from the catalog. Immutable once drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatSpec {
    /// Identifier the rendering side maps to a color or sprite.
    pub tag: String,
    /// Travel speed (units/s).
    pub speed: f64,
}

impl ThreatSpec {
    pub fn new(tag: impl Into<String>, speed: f64) -> Self {
        Self {
            tag: tag.into(),
            speed,
        }
    }
}

impl std::fmt::Display for ThreatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{:03}", self.0)
    }
}
