//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile lane runner.
    Runner,
    /// Slow, heavily armored bruiser.
    Tank,
    /// Cheap filler that arrives in numbers.
    Swarm,
    /// Tough mid-run checkpoint enemy.
    MiniBoss,
    /// The final boss. Carries a `BossState` component with its own
    /// phase machine.
    Boss,
}

/// Baseline stats for an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub max_health: f64,
    pub speed: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub reward: u32,
    /// Collision radius for projectile hits (world units).
    pub radius: f64,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Runner => EnemyStats {
                max_health: 50.0,
                speed: 2.5,
                armor: 0.0,
                magic_resist: 0.0,
                reward: 5,
                radius: 10.0,
            },
            EnemyKind::Tank => EnemyStats {
                max_health: 200.0,
                speed: 0.8,
                armor: 5.0,
                magic_resist: 0.0,
                reward: 15,
                radius: 15.0,
            },
            EnemyKind::Swarm => EnemyStats {
                max_health: 20.0,
                speed: 1.8,
                armor: 0.0,
                magic_resist: 0.0,
                reward: 2,
                radius: 7.0,
            },
            EnemyKind::MiniBoss => EnemyStats {
                max_health: 500.0,
                speed: 1.0,
                armor: 10.0,
                magic_resist: 5.0,
                reward: 50,
                radius: 18.0,
            },
            EnemyKind::Boss => EnemyStats {
                max_health: 1000.0,
                speed: 0.8,
                armor: 15.0,
                magic_resist: 10.0,
                reward: 200,
                radius: 20.0,
            },
        }
    }
}

/// Tower archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Cheap single-target physical damage with a crit chance.
    Archer,
    /// Low damage, slows and freezes on hit.
    Freeze,
    /// Heavy physical splash with armor penetration and a stun chance.
    Cannon,
    /// Magic splash with magic-resist penetration; burns at level 3.
    Mage,
}

/// Baseline stats for a tower archetype at level 1.
#[derive(Debug, Clone, Copy)]
pub struct TowerStats {
    pub range: f64,
    pub damage: f64,
    pub fire_rate_ms: f64,
    pub cost: u32,
    pub upgrade_cost: u32,
    pub damage_kind: DamageKind,
    pub crit_chance: f64,
    pub armor_pen: f64,
    pub magic_pen: f64,
    /// Splash radius for area-of-effect towers.
    pub splash_radius: Option<f64>,
    pub can_slow: bool,
    pub can_freeze: bool,
    pub can_stun: bool,
}

impl TowerKind {
    pub fn stats(self) -> TowerStats {
        match self {
            TowerKind::Archer => TowerStats {
                range: 120.0,
                damage: 15.0,
                fire_rate_ms: 1000.0,
                cost: 50,
                upgrade_cost: 30,
                damage_kind: DamageKind::Physical,
                crit_chance: 0.1,
                armor_pen: 0.0,
                magic_pen: 0.0,
                splash_radius: None,
                can_slow: false,
                can_freeze: false,
                can_stun: false,
            },
            TowerKind::Freeze => TowerStats {
                range: 100.0,
                damage: 5.0,
                fire_rate_ms: 1500.0,
                cost: 75,
                upgrade_cost: 40,
                damage_kind: DamageKind::Magic,
                crit_chance: 0.0,
                armor_pen: 0.0,
                magic_pen: 0.0,
                splash_radius: None,
                can_slow: true,
                can_freeze: true,
                can_stun: false,
            },
            TowerKind::Cannon => TowerStats {
                range: 150.0,
                damage: 40.0,
                fire_rate_ms: 2000.0,
                cost: 100,
                upgrade_cost: 50,
                damage_kind: DamageKind::Physical,
                crit_chance: 0.0,
                armor_pen: 5.0,
                magic_pen: 0.0,
                splash_radius: Some(30.0),
                can_slow: false,
                can_freeze: false,
                can_stun: true,
            },
            TowerKind::Mage => TowerStats {
                range: 110.0,
                damage: 25.0,
                fire_rate_ms: 1200.0,
                cost: 90,
                upgrade_cost: 45,
                damage_kind: DamageKind::Magic,
                crit_chance: 0.0,
                armor_pen: 0.0,
                magic_pen: 3.0,
                splash_radius: Some(40.0),
                can_slow: false,
                can_freeze: false,
                can_stun: false,
            },
        }
    }
}

/// Damage school, mitigated by armor or magic resist respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    #[default]
    Physical,
    Magic,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Choosing one of the offered artifacts (run start, and after wave 10).
    ArtifactSelect,
    /// Between waves; towers can be placed, the next wave is armed manually.
    Preparation,
    /// A wave is in progress.
    Playing,
    Paused,
    Victory,
    GameOver,
}

/// Artifact identity. Definitions live in [`crate::artifacts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactId {
    FrozenVulnerability,
    CriticalMastery,
    ArmorBreaker,
    RapidFire,
    TowerFocus,
    GoldenTouch,
    EfficientUpgrades,
    Fortress,
    Regeneration,
    ChainReaction,
    SlowMastery,
    TowerSynergy,
}
