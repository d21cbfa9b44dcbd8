//! Simulation engine for VISION COMMAND.
//!
//! Owns the hecs world of active threats, drives the reticle and dwell
//! trigger from pointer samples, and produces `SimSnapshot`s for the
//! rendering collaborator.

pub mod clock;
pub mod engine;
pub mod interfaces;
pub mod random;
pub mod systems;
pub mod threat;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use vision_core as core;
