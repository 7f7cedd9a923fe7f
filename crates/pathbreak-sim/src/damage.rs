//! Damage and status application helpers shared by several systems.

use pathbreak_core::components::{BossState, Defense, Health, StatusEffects};
use pathbreak_core::constants::MIN_DAMAGE;
use pathbreak_core::enums::DamageKind;

/// Apply a hit to an enemy. Mitigation is flat per damage school with a
/// floor of `MIN_DAMAGE`. An active boss shield absorbs the RAW amount
/// instead; breaking it clamps to zero and the overflow is not carried
/// into health. Returns true if this hit killed the enemy.
pub fn apply_damage(
    health: &mut Health,
    defense: &Defense,
    boss: Option<&mut BossState>,
    amount: f64,
    kind: DamageKind,
) -> bool {
    if health.health <= 0.0 {
        return false;
    }

    if let Some(boss) = boss {
        if boss.shield_active && boss.shield_health > 0.0 {
            boss.shield_health -= amount;
            if boss.shield_health <= 0.0 {
                boss.shield_health = 0.0;
                boss.shield_active = false;
            }
            return false;
        }
    }

    let mitigation = match kind {
        DamageKind::Physical => defense.armor,
        DamageKind::Magic => defense.magic_resist,
    };
    health.health -= (amount - mitigation).max(MIN_DAMAGE);

    if health.health <= 0.0 {
        health.health = 0.0;
        true
    } else {
        false
    }
}

/// Slows only ever strengthen (lower multiplier wins) and persist for the
/// enemy's remaining lifetime.
pub fn apply_slow(status: &mut StatusEffects, multiplier: f64) {
    if multiplier < status.slow_multiplier {
        status.slow_multiplier = multiplier;
    }
}

pub fn apply_freeze(status: &mut StatusEffects, duration_ms: f64) {
    status.frozen = true;
    status.freeze_ms = status.freeze_ms.max(duration_ms);
}

pub fn apply_stun(status: &mut StatusEffects, duration_ms: f64) {
    status.stunned = true;
    status.stun_ms = status.stun_ms.max(duration_ms);
}

/// Burn damage replaces the previous value; burn duration extends.
pub fn apply_burn(status: &mut StatusEffects, damage: f64, duration_ms: f64) {
    status.burning = true;
    status.burn_damage = damage;
    status.burn_ms = status.burn_ms.max(duration_ms);
}
