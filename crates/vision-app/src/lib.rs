//! VISION COMMAND headless host.
//!
//! Runs the simulation engine on its own game-loop thread, feeds it pointer
//! samples over a channel, and reports what happens through `tracing`.

pub mod autopilot;
pub mod game_loop;
pub mod sink;
pub mod state;

pub use vision_core as core;
