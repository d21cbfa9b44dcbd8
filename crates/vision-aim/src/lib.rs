//! Aiming logic for VISION COMMAND.
//!
//! Implements the dual-rate reticle and the dwell-to-fire state machine.
//! No ECS dependency; operates on plain data so the engine and tests can
//! drive it directly.

pub mod dwell;
pub mod reticle;

pub use vision_core as core;

#[cfg(test)]
mod tests;
