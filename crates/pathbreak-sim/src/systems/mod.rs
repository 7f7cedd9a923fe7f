//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or
//! in the engine.

pub mod area_effect;
pub mod boss;
pub mod lifecycle;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod status;
pub mod targeting;
pub mod wave_spawner;
