//! Modifier engine: folds held artifacts into passive modification sets
//! and answers the event-driven special effects (death explosions, tower
//! synergy).

use pathbreak_core::artifacts::{ArtifactEffect, ModificationSet};
use pathbreak_core::enums::ArtifactId;
use pathbreak_core::events::GameEvent;
use pathbreak_core::types::Position;

/// Fold all held artifacts into one modification set. `target_frozen`
/// gates the conditional frozen-damage bonus and only matters when the
/// set is evaluated against a specific hit.
pub fn passive_set(artifacts: &[ArtifactId], target_frozen: bool) -> ModificationSet {
    let mut set = ModificationSet::default();
    for artifact in artifacts {
        set.fold(&artifact.def().effect, target_frozen);
    }
    set
}

/// A triggered special effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialEffect {
    /// Area damage centered on a death position (chain reaction).
    Explosion {
        position: Position,
        damage: f64,
        radius: f64,
    },
}

/// Evaluate event-driven artifact effects for one event. Currently only
/// enemy deaths trigger anything; `TowerFired` synergy is queried at fire
/// time via [`synergy_multiplier`] because the damage number is needed
/// before the projectile is booked.
pub fn check_special_effects(artifacts: &[ArtifactId], event: &GameEvent) -> Vec<SpecialEffect> {
    let mut effects = Vec::new();
    if let GameEvent::EnemyKilled { position, .. } = event {
        for artifact in artifacts {
            if let ArtifactEffect::DeathExplosion { damage, radius } = artifact.def().effect {
                effects.push(SpecialEffect::Explosion {
                    position: *position,
                    damage,
                    radius,
                });
            }
        }
    }
    effects
}

/// Death explosion parameters, if the chain-reaction artifact is held.
pub fn death_explosion(artifacts: &[ArtifactId]) -> Option<(f64, f64)> {
    artifacts.iter().find_map(|a| match a.def().effect {
        ArtifactEffect::DeathExplosion { damage, radius } => Some((damage, radius)),
        _ => None,
    })
}

/// Damage multiplier for a firing tower from nearby towers.
/// 1.0 without the synergy artifact.
pub fn synergy_multiplier(
    artifacts: &[ArtifactId],
    tower_pos: &Position,
    all_tower_positions: &[Position],
) -> f64 {
    let mut multiplier = 1.0;
    for artifact in artifacts {
        if let ArtifactEffect::TowerSynergy { per_tower, radius } = artifact.def().effect {
            let nearby = all_tower_positions
                .iter()
                .filter(|p| *p != tower_pos && tower_pos.range_to(p) <= radius)
                .count();
            multiplier *= 1.0 + per_tower * nearby as f64;
        }
    }
    multiplier
}

/// How much stronger applied slows are. The documented mutation exception:
/// this deepens the slow multiplier at application time instead of
/// contributing to the passive set.
pub fn slow_effectiveness(artifacts: &[ArtifactId]) -> f64 {
    let mut factor = 1.0;
    for artifact in artifacts {
        if let ArtifactEffect::SlowEffectiveness(f) = artifact.def().effect {
            factor *= f;
        }
    }
    factor
}

/// Extra lives granted at run start.
pub fn bonus_lives(artifacts: &[ArtifactId]) -> u32 {
    artifacts
        .iter()
        .map(|a| match a.def().effect {
            ArtifactEffect::BonusLives(n) => n,
            _ => 0,
        })
        .sum()
}

/// Lives restored after each completed wave.
pub fn wave_regen(artifacts: &[ArtifactId]) -> u32 {
    artifacts
        .iter()
        .map(|a| match a.def().effect {
            ArtifactEffect::WaveRegen(n) => n,
            _ => 0,
        })
        .sum()
}
