//! Simulation engine for Pathbreak.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod damage;
pub mod economy;
pub mod engine;
pub mod modifiers;
pub mod pool;
pub mod progress;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use pathbreak_core as core;
