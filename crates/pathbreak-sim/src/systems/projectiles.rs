//! Projectile flight and hit resolution.
//!
//! Projectiles home toward their target's live position. A target that no
//! longer resolves (despawned, dead, or leaked) discards the projectile
//! silently: no damage, no splash. Hits apply damage first, then status
//! effects in a fixed order: slow, freeze, stun roll, burn.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pathbreak_core::components::*;
use pathbreak_core::constants::*;
use pathbreak_core::enums::{ArtifactId, DamageKind};
use pathbreak_core::events::GameEvent;
use pathbreak_core::types::Position;

use crate::damage;
use crate::modifiers;
use crate::pool::ProjectilePool;

/// Deferred splash damage, resolved by the area-effect system after all
/// direct hits have landed.
#[derive(Debug, Clone, Copy)]
pub struct SplashRecord {
    pub position: Position,
    pub damage: f64,
    pub kind: DamageKind,
    pub radius: f64,
    /// The direct-hit victim, excluded from the splash.
    pub primary: hecs::Entity,
}

pub fn run(
    world: &mut World,
    pool: &mut ProjectilePool,
    artifacts: &[ArtifactId],
    rng: &mut ChaCha8Rng,
    dt_ms: f64,
    events: &mut Vec<GameEvent>,
    splash_out: &mut Vec<SplashRecord>,
) {
    let slow_factor = modifiers::slow_effectiveness(artifacts);

    for index in pool.active_indices() {
        let Some(projectile) = pool.get_mut(index) else {
            continue;
        };

        projectile.life_ms -= dt_ms;
        if projectile.life_ms <= 0.0 {
            pool.release(index);
            continue;
        }

        // Resolve the target. Anything short of a live, un-leaked enemy
        // discards the projectile.
        let target = projectile.target;
        let target_pos = {
            let Ok(mut query) =
                world.query_one::<(&Position, &Health, &PathFollower)>(target)
            else {
                pool.release(index);
                continue;
            };
            match query.get() {
                Some((pos, health, follower)) if health.health > 0.0 && !follower.reached_end => {
                    *pos
                }
                _ => {
                    pool.release(index);
                    continue;
                }
            }
        };

        let here = projectile.position.as_dvec2();
        let there = target_pos.as_dvec2();
        let distance = here.distance(there);
        let step = projectile.speed * dt_ms * MOVE_DISTANCE_SCALE;

        let radius = world
            .get::<&Enemy>(target)
            .map(|e| e.kind.stats().radius)
            .unwrap_or(0.0);

        if distance > radius && step < distance {
            projectile.position = Position::from_dvec2(here + (there - here) / distance * step);
            continue;
        }

        // Contact. Take what we need from the slot, then release it.
        let shot = projectile.clone();
        pool.release(index);
        resolve_hit(world, &shot, artifacts, slow_factor, rng, events, splash_out);
    }
}

/// Apply one projectile's damage and rider effects to its target.
fn resolve_hit(
    world: &mut World,
    shot: &crate::pool::Projectile,
    artifacts: &[ArtifactId],
    slow_factor: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    splash_out: &mut Vec<SplashRecord>,
) {
    let (total, killed) = {
        let Ok((health, defense, status, boss)) = world.query_one_mut::<(
            &mut Health,
            &Defense,
            &mut StatusEffects,
            Option<&mut BossState>,
        )>(shot.target) else {
            return;
        };

        // Penetration joins the hit before mitigation.
        let penetration = match shot.damage_kind {
            DamageKind::Physical => shot.armor_pen,
            DamageKind::Magic => shot.magic_pen,
        };
        let mut total = shot.damage + penetration;
        let was_frozen = status.frozen;

        let mut boss = boss;
        let mut killed =
            damage::apply_damage(health, defense, boss.as_deref_mut(), total, shot.damage_kind);

        // Conditional frozen-damage bonus lands as a second, smaller hit.
        if !killed && was_frozen {
            let multiplier = modifiers::passive_set(artifacts, true).damage_multiplier;
            if multiplier > 1.0 {
                let bonus = (total * (multiplier - 1.0)).floor();
                if bonus > 0.0 {
                    killed = damage::apply_damage(
                        health,
                        defense,
                        boss.as_deref_mut(),
                        bonus,
                        shot.damage_kind,
                    );
                    total += bonus;
                }
            }
        }

        // Status riders, in order: slow, freeze, stun roll, burn.
        if shot.can_slow && !status.frozen {
            damage::apply_slow(status, SLOW_MULTIPLIER / slow_factor);
        }
        if shot.can_freeze {
            damage::apply_freeze(status, FREEZE_DURATION_MS);
        }
        if shot.can_stun && rng.gen::<f64>() < STUN_PROC_CHANCE {
            damage::apply_stun(status, STUN_DURATION_MS);
        }
        if shot.can_burn {
            damage::apply_burn(status, shot.burn_damage, shot.burn_duration_ms);
        }

        (total, killed)
    };

    events.push(GameEvent::ProjectileHit {
        tower_id: shot.tower_id,
        enemy_id: shot.target_id,
        damage: total,
        killed,
    });

    if let Some(radius) = shot.splash_radius {
        let position = world
            .get::<&Position>(shot.target)
            .map(|p| *p)
            .unwrap_or_default();
        splash_out.push(SplashRecord {
            position,
            damage: shot.damage * SPLASH_DAMAGE_FACTOR,
            kind: shot.damage_kind,
            radius,
            primary: shot.target,
        });
    }
}
