//! Tower targeting and firing.
//!
//! Each tower acquires the nearest living, un-leaked enemy within its
//! effective range (stable ascending-id scan, strict `<` keeps the first
//! found on ties), then fires when its cadence allows. Artifact modifiers
//! are evaluated here at use time, never baked into the stored stats.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pathbreak_core::components::*;
use pathbreak_core::constants::{CRIT_MULTIPLIER, PROJECTILE_LIFETIME_MS, PROJECTILE_SPEED};
use pathbreak_core::enums::ArtifactId;
use pathbreak_core::events::GameEvent;
use pathbreak_core::types::Position;

use crate::modifiers;
use crate::pool::{Projectile, ProjectilePool};

pub fn run(
    world: &mut World,
    pool: &mut ProjectilePool,
    artifacts: &[ArtifactId],
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    // Candidate list in ascending id order for a stable scan.
    let mut candidates: Vec<(EnemyId, hecs::Entity, Position)> = world
        .query::<(&EnemyId, &Enemy, &Position, &Health, &PathFollower)>()
        .iter()
        .filter(|(_, (_, _, _, health, follower))| health.health > 0.0 && !follower.reached_end)
        .map(|(entity, (id, _, pos, _, _))| (*id, entity, *pos))
        .collect();
    candidates.sort_by_key(|(id, _, _)| id.0);

    let tower_positions: Vec<Position> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();

    let mods = modifiers::passive_set(artifacts, false);

    for (_entity, (tower_id, tower, pos, weapon)) in
        world.query_mut::<(&TowerId, &mut Tower, &Position, &mut Weapon)>()
    {
        let effective_range = weapon.range * mods.range_multiplier;

        // Nearest in range, first found wins ties.
        let mut best: Option<(EnemyId, hecs::Entity, Position, f64)> = None;
        for (id, entity, enemy_pos) in &candidates {
            let distance = pos.range_to(enemy_pos);
            if distance > effective_range {
                continue;
            }
            if best.map_or(true, |(_, _, _, best_dist)| distance < best_dist) {
                best = Some((*id, *entity, *enemy_pos, distance));
            }
        }

        let Some((target_id, target_entity, target_pos, _)) = best else {
            weapon.target = None;
            continue;
        };
        weapon.target = Some(target_id);
        tower.aim = pos.angle_to(&target_pos);

        // Cadence gate. A tower that has never fired may fire immediately.
        let effective_rate = weapon.fire_rate_ms * mods.fire_rate_multiplier;
        let ready = match weapon.last_fire_ms {
            None => true,
            Some(last) => now_ms - last >= effective_rate,
        };
        if !ready {
            continue;
        }
        weapon.last_fire_ms = Some(now_ms);

        let crit_chance = (weapon.crit_chance + mods.crit_chance_bonus).clamp(0.0, 1.0);
        let crit = crit_chance > 0.0 && rng.gen::<f64>() < crit_chance;
        let mut damage = weapon.damage;
        if crit {
            damage *= CRIT_MULTIPLIER;
        }
        damage *= modifiers::synergy_multiplier(artifacts, pos, &tower_positions);

        pool.spawn(Projectile {
            position: *pos,
            speed: PROJECTILE_SPEED,
            damage,
            damage_kind: weapon.damage_kind,
            crit,
            armor_pen: weapon.armor_pen * mods.armor_pen_multiplier,
            magic_pen: weapon.magic_pen,
            splash_radius: weapon.splash_radius,
            can_slow: weapon.can_slow,
            can_freeze: weapon.can_freeze,
            can_stun: weapon.can_stun,
            can_burn: weapon.can_burn,
            burn_damage: weapon.burn_damage,
            burn_duration_ms: weapon.burn_duration_ms,
            target: target_entity,
            target_id,
            tower_id: *tower_id,
            life_ms: PROJECTILE_LIFETIME_MS,
        });

        events.push(GameEvent::TowerFired {
            tower_id: *tower_id,
            enemy_id: target_id,
            crit,
        });
    }
}
