//! Artifact catalog and the modification set they fold into.

use serde::{Deserialize, Serialize};

use crate::enums::ArtifactId;

/// What an artifact does. Passive multipliers fold into a
/// [`ModificationSet`]; the remaining variants are consumed elsewhere
/// (run setup, wave completion, event-driven special effects).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArtifactEffect {
    /// Damage multiplier applied only when the hit target is frozen.
    DamageVsFrozen(f64),
    CritChanceBonus(f64),
    ArmorPenMultiplier(f64),
    /// Multiplier on fire interval; below 1.0 fires faster.
    FireRateMultiplier(f64),
    RangeMultiplier(f64),
    GoldMultiplier(f64),
    UpgradeCostMultiplier(f64),
    /// Extra lives granted at run start.
    BonusLives(u32),
    /// Lives restored after each completed wave (capped).
    WaveRegen(u32),
    /// Enemies explode on death.
    DeathExplosion { damage: f64, radius: f64 },
    /// Applied slows are this factor stronger.
    SlowEffectiveness(f64),
    /// Damage bonus per other tower within the radius.
    TowerSynergy { per_tower: f64, radius: f64 },
}

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactDef {
    pub id: ArtifactId,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: ArtifactEffect,
}

/// The full artifact pool.
pub const CATALOG: &[ArtifactDef] = &[
    ArtifactDef {
        id: ArtifactId::FrozenVulnerability,
        name: "Frozen Vulnerability",
        description: "Frozen enemies take 20% more damage",
        effect: ArtifactEffect::DamageVsFrozen(1.2),
    },
    ArtifactDef {
        id: ArtifactId::CriticalMastery,
        name: "Critical Mastery",
        description: "All towers gain +15% critical strike chance",
        effect: ArtifactEffect::CritChanceBonus(0.15),
    },
    ArtifactDef {
        id: ArtifactId::ArmorBreaker,
        name: "Armor Breaker",
        description: "Armor penetration increased by 50%",
        effect: ArtifactEffect::ArmorPenMultiplier(1.5),
    },
    ArtifactDef {
        id: ArtifactId::RapidFire,
        name: "Rapid Fire",
        description: "All towers attack 10% faster",
        effect: ArtifactEffect::FireRateMultiplier(0.9),
    },
    ArtifactDef {
        id: ArtifactId::TowerFocus,
        name: "Tower Focus",
        description: "All towers gain +15% range",
        effect: ArtifactEffect::RangeMultiplier(1.15),
    },
    ArtifactDef {
        id: ArtifactId::GoldenTouch,
        name: "Golden Touch",
        description: "Enemies drop 25% more gold",
        effect: ArtifactEffect::GoldMultiplier(1.25),
    },
    ArtifactDef {
        id: ArtifactId::EfficientUpgrades,
        name: "Efficient Upgrades",
        description: "Tower upgrades cost 20% less",
        effect: ArtifactEffect::UpgradeCostMultiplier(0.8),
    },
    ArtifactDef {
        id: ArtifactId::Fortress,
        name: "Fortress",
        description: "Start each run with +5 lives",
        effect: ArtifactEffect::BonusLives(5),
    },
    ArtifactDef {
        id: ArtifactId::Regeneration,
        name: "Regeneration",
        description: "Recover 1 life after each wave",
        effect: ArtifactEffect::WaveRegen(1),
    },
    ArtifactDef {
        id: ArtifactId::ChainReaction,
        name: "Chain Reaction",
        description: "Enemies explode on death",
        effect: ArtifactEffect::DeathExplosion {
            damage: 20.0,
            radius: 50.0,
        },
    },
    ArtifactDef {
        id: ArtifactId::SlowMastery,
        name: "Slow Mastery",
        description: "Slow effects are 50% stronger",
        effect: ArtifactEffect::SlowEffectiveness(1.5),
    },
    ArtifactDef {
        id: ArtifactId::TowerSynergy,
        name: "Tower Synergy",
        description: "Towers deal +10% damage per nearby tower",
        effect: ArtifactEffect::TowerSynergy {
            per_tower: 0.1,
            radius: 100.0,
        },
    },
];

impl ArtifactId {
    /// Catalog definition for this artifact.
    pub fn def(self) -> &'static ArtifactDef {
        // CATALOG covers every variant.
        CATALOG
            .iter()
            .find(|d| d.id == self)
            .unwrap_or(&CATALOG[0])
    }
}

/// Combined passive modifiers from all held artifacts. Defaults to the
/// identity; folding is commutative (multipliers multiply, bonuses add),
/// so artifact pickup order never matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModificationSet {
    pub damage_multiplier: f64,
    pub crit_chance_bonus: f64,
    pub fire_rate_multiplier: f64,
    pub range_multiplier: f64,
    pub armor_pen_multiplier: f64,
    pub gold_multiplier: f64,
    pub upgrade_cost_multiplier: f64,
}

impl Default for ModificationSet {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
            crit_chance_bonus: 0.0,
            fire_rate_multiplier: 1.0,
            range_multiplier: 1.0,
            armor_pen_multiplier: 1.0,
            gold_multiplier: 1.0,
            upgrade_cost_multiplier: 1.0,
        }
    }
}

impl ModificationSet {
    /// Fold one artifact effect into the set. `target_frozen` gates the
    /// conditional frozen-damage bonus; effects that are not passive
    /// multipliers are ignored here and consumed by their own systems.
    pub fn fold(&mut self, effect: &ArtifactEffect, target_frozen: bool) {
        match *effect {
            ArtifactEffect::DamageVsFrozen(m) => {
                if target_frozen {
                    self.damage_multiplier *= m;
                }
            }
            ArtifactEffect::CritChanceBonus(b) => self.crit_chance_bonus += b,
            ArtifactEffect::ArmorPenMultiplier(m) => self.armor_pen_multiplier *= m,
            ArtifactEffect::FireRateMultiplier(m) => self.fire_rate_multiplier *= m,
            ArtifactEffect::RangeMultiplier(m) => self.range_multiplier *= m,
            ArtifactEffect::GoldMultiplier(m) => self.gold_multiplier *= m,
            ArtifactEffect::UpgradeCostMultiplier(m) => self.upgrade_cost_multiplier *= m,
            ArtifactEffect::BonusLives(_)
            | ArtifactEffect::WaveRegen(_)
            | ArtifactEffect::DeathExplosion { .. }
            | ArtifactEffect::SlowEffectiveness(_)
            | ArtifactEffect::TowerSynergy { .. } => {}
        }
    }
}
