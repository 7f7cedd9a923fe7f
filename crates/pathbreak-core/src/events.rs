//! Typed events emitted by the simulation, one batch per tick.
//!
//! Events are both the frontend feedback channel and the input to the
//! modifier engine's special effects (death explosions, synergy).

use serde::{Deserialize, Serialize};

use crate::components::{EnemyId, TowerId};
use crate::enums::*;
use crate::types::Position;

/// Everything notable that happened during a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveStarted {
        wave: u32,
    },
    EnemySpawned {
        enemy_id: EnemyId,
        kind: EnemyKind,
    },
    /// Enemy died. Position is the death location (anchor for chain
    /// explosions).
    EnemyKilled {
        enemy_id: EnemyId,
        kind: EnemyKind,
        position: Position,
        reward: u32,
    },
    /// Enemy reached the final waypoint and cost a life.
    EnemyLeaked {
        enemy_id: EnemyId,
        kind: EnemyKind,
    },
    TowerFired {
        tower_id: TowerId,
        enemy_id: EnemyId,
        crit: bool,
    },
    ProjectileHit {
        tower_id: TowerId,
        enemy_id: EnemyId,
        damage: f64,
        killed: bool,
    },
    BossPhaseChanged {
        enemy_id: EnemyId,
        phase: u8,
    },
    BossSummoned {
        enemy_id: EnemyId,
        count: u32,
    },
    WaveCompleted {
        wave: u32,
        reward: u32,
    },
    ArtifactChosen {
        artifact: ArtifactId,
    },
}
