//! Core types and definitions for the VISION COMMAND simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, snapshots, events, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
