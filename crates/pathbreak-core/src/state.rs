//! Game state snapshot: the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::components::{EnemyId, TowerId};
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
    pub panic_tokens: u32,
    pub time_scale: f64,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Artifacts held this run.
    pub artifacts: Vec<ArtifactId>,
    /// Artifacts currently offered (only in ArtifactSelect phase).
    pub offered_artifacts: Vec<ArtifactId>,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub slow_multiplier: f64,
    pub frozen: bool,
    pub stunned: bool,
    pub burning: bool,
    /// Boss-only state.
    pub boss: Option<BossView>,
}

/// Boss phase machine state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub phase: u8,
    pub shield_active: bool,
    pub shield_health: f64,
    pub max_shield_health: f64,
    pub rage_mode: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub tower_id: TowerId,
    pub kind: TowerKind,
    pub level: u8,
    pub position: Position,
    /// Effective range after artifact modifiers.
    pub range: f64,
    pub damage: f64,
    /// Facing angle (radians, cosmetic).
    pub aim: f64,
    pub target: Option<EnemyId>,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub crit: bool,
}
