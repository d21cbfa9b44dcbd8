//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Per-run state such as the spawn timer lives in the engine and is passed in.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
