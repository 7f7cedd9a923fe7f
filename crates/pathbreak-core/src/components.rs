//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable external identifier for an enemy entity. Monotonic per run.
/// Snapshots, events and tower targets reference enemies by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Stable external identifier for a tower entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerId(pub u32);

/// Marks an entity as an enemy and carries its archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub health: f64,
    pub max: f64,
}

/// Damage mitigation. Subtracted flat from incoming hits of the matching
/// school, with a floor of `MIN_DAMAGE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defense {
    pub armor: f64,
    pub magic_resist: f64,
}

/// Progress along the waypoint polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    /// Base movement speed (before slow multiplier).
    pub speed: f64,
    /// Index of the waypoint the enemy is moving away from.
    pub path_index: usize,
    /// Total distance traveled, used as a targeting tiebreak-free metric
    /// for display only.
    pub distance_traveled: f64,
    /// Set when the final waypoint is reached (leak).
    pub reached_end: bool,
}

/// Active status effects on an enemy. Timers are sim-time milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Movement multiplier, 1.0 = unaffected. Only ever strengthened;
    /// persists for the enemy's remaining lifetime.
    pub slow_multiplier: f64,
    pub frozen: bool,
    pub freeze_ms: f64,
    pub stunned: bool,
    pub stun_ms: f64,
    pub burning: bool,
    /// Damage dealt per burn tick (magic school).
    pub burn_damage: f64,
    pub burn_ms: f64,
}

impl Default for StatusEffects {
    fn default() -> Self {
        Self {
            slow_multiplier: 1.0,
            frozen: false,
            freeze_ms: 0.0,
            stunned: false,
            stun_ms: 0.0,
            burning: false,
            burn_damage: 0.0,
            burn_ms: 0.0,
        }
    }
}

/// Boss phase machine state, attached alongside the regular enemy
/// components. Phases only move forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    /// Current phase, 1..=3.
    pub phase: u8,
    pub shield_active: bool,
    pub shield_health: f64,
    pub max_shield_health: f64,
    pub rage_mode: bool,
    /// Sim time of the last summon volley (ms).
    pub last_summon_ms: f64,
}

/// Kill reward bookkeeping. `collected` latches so a kill pays out once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounty {
    pub reward: u32,
    pub collected: bool,
}

/// Marks an entity as a tower and carries its archetype and level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    /// Upgrade level, 1..=MAX_TOWER_LEVEL.
    pub level: u8,
    /// Facing angle toward the current target (radians, cosmetic).
    pub aim: f64,
}

/// Tower weapon stats. Artifact modifiers are applied at use time and are
/// never baked into these fields; upgrades rewrite them from the base
/// values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub damage_kind: DamageKind,
    pub damage: f64,
    pub range: f64,
    pub fire_rate_ms: f64,
    pub crit_chance: f64,
    pub armor_pen: f64,
    pub magic_pen: f64,
    pub splash_radius: Option<f64>,
    pub can_slow: bool,
    pub can_freeze: bool,
    pub can_stun: bool,
    pub can_burn: bool,
    pub burn_damage: f64,
    pub burn_duration_ms: f64,
    /// Sim time of the last shot; `None` means the tower has never fired
    /// and may fire immediately.
    pub last_fire_ms: Option<f64>,
    /// Current target by enemy id (stale ids are simply re-acquired).
    pub target: Option<EnemyId>,
}
