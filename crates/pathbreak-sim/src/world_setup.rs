//! World setup helpers: spawning enemies and towers, applying upgrades.

use hecs::{Entity, World};

use pathbreak_core::components::*;
use pathbreak_core::constants::*;
use pathbreak_core::enums::{EnemyKind, TowerKind};
use pathbreak_core::types::Position;

/// Spawn an enemy at the given waypoint index of the path. A path with
/// fewer than two points pins the enemy at the origin; movement will flag
/// it as leaked on the next tick.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    path: &[Position],
    start_index: usize,
    id: EnemyId,
    now_ms: f64,
) -> Entity {
    let stats = kind.stats();
    let index = start_index.min(path.len().saturating_sub(1));
    let position = path.get(index).copied().unwrap_or_default();

    let entity = world.spawn((
        id,
        Enemy { kind },
        position,
        Health {
            health: stats.max_health,
            max: stats.max_health,
        },
        Defense {
            armor: stats.armor,
            magic_resist: stats.magic_resist,
        },
        PathFollower {
            speed: stats.speed,
            path_index: index,
            distance_traveled: 0.0,
            reached_end: false,
        },
        StatusEffects::default(),
        Bounty {
            reward: stats.reward,
            collected: false,
        },
    ));

    if kind == EnemyKind::Boss {
        let _ = world.insert_one(
            entity,
            BossState {
                phase: 1,
                shield_active: false,
                shield_health: 0.0,
                max_shield_health: 0.0,
                rage_mode: false,
                last_summon_ms: now_ms,
            },
        );
    }

    entity
}

/// Spawn a level-1 tower at a position.
pub fn spawn_tower(world: &mut World, kind: TowerKind, position: Position, id: TowerId) -> Entity {
    let stats = kind.stats();
    world.spawn((
        id,
        Tower {
            kind,
            level: 1,
            aim: 0.0,
        },
        position,
        Weapon {
            damage_kind: stats.damage_kind,
            damage: stats.damage,
            range: stats.range,
            fire_rate_ms: stats.fire_rate_ms,
            crit_chance: stats.crit_chance,
            armor_pen: stats.armor_pen,
            magic_pen: stats.magic_pen,
            splash_radius: stats.splash_radius,
            can_slow: stats.can_slow,
            can_freeze: stats.can_freeze,
            can_stun: stats.can_stun,
            can_burn: false,
            burn_damage: 0.0,
            burn_duration_ms: 0.0,
            last_fire_ms: None,
            target: None,
        },
    ))
}

/// Rewrite a weapon's stats for its tower's current level. Damage and
/// range scale from the level-1 base; capability unlocks apply at fixed
/// levels per archetype.
pub fn apply_level(tower: &Tower, weapon: &mut Weapon) {
    let base = tower.kind.stats();
    let level = f64::from(tower.level);
    weapon.damage = (base.damage * (1.0 + UPGRADE_DAMAGE_STEP * (level - 1.0))).floor();
    weapon.range = (base.range * (1.0 + UPGRADE_RANGE_STEP * (level - 1.0))).floor();

    match tower.kind {
        TowerKind::Archer => {
            if tower.level >= 2 {
                weapon.crit_chance = 0.25;
            }
        }
        TowerKind::Cannon => {
            if tower.level >= 2 {
                weapon.armor_pen = 10.0;
            }
        }
        TowerKind::Mage => {
            if tower.level >= 2 {
                weapon.splash_radius = Some(50.0);
                weapon.magic_pen = 5.0;
            }
            if tower.level >= 3 {
                weapon.can_burn = true;
                weapon.burn_damage = 5.0;
                weapon.burn_duration_ms = 3000.0;
            }
        }
        TowerKind::Freeze => {}
    }
}
