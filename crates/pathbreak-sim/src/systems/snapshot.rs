//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only; it never modifies the world.

use hecs::World;

use pathbreak_core::artifacts::ModificationSet;
use pathbreak_core::components::*;
use pathbreak_core::enums::*;
use pathbreak_core::events::GameEvent;
use pathbreak_core::state::*;
use pathbreak_core::types::{Position, SimTime};

use crate::pool::ProjectilePool;

/// Everything the snapshot needs besides the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub gold: u32,
    pub lives: u32,
    pub score: u64,
    pub panic_tokens: u32,
    pub time_scale: f64,
    pub artifacts: &'a [ArtifactId],
    pub offered_artifacts: &'a [ArtifactId],
    pub mods: ModificationSet,
    pub events: Vec<GameEvent>,
}

pub fn build_snapshot(
    world: &World,
    pool: &ProjectilePool,
    ctx: SnapshotContext<'_>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        wave: ctx.wave,
        gold: ctx.gold,
        lives: ctx.lives,
        score: ctx.score,
        panic_tokens: ctx.panic_tokens,
        time_scale: ctx.time_scale,
        enemies: build_enemies(world),
        towers: build_towers(world, &ctx.mods),
        projectiles: build_projectiles(pool),
        artifacts: ctx.artifacts.to_vec(),
        offered_artifacts: ctx.offered_artifacts.to_vec(),
        events: ctx.events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &EnemyId,
            &Enemy,
            &Position,
            &Health,
            &StatusEffects,
            Option<&BossState>,
        )>()
        .iter()
        .map(|(_, (id, enemy, pos, health, status, boss))| EnemyView {
            enemy_id: *id,
            kind: enemy.kind,
            position: *pos,
            health: health.health,
            max_health: health.max,
            slow_multiplier: status.slow_multiplier,
            frozen: status.frozen,
            stunned: status.stunned,
            burning: status.burning,
            boss: boss.map(|b| BossView {
                phase: b.phase,
                shield_active: b.shield_active,
                shield_health: b.shield_health,
                max_shield_health: b.max_shield_health,
                rage_mode: b.rage_mode,
            }),
        })
        .collect();

    enemies.sort_by_key(|e| e.enemy_id.0);
    enemies
}

fn build_towers(world: &World, mods: &ModificationSet) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&TowerId, &Tower, &Position, &Weapon)>()
        .iter()
        .map(|(_, (id, tower, pos, weapon))| TowerView {
            tower_id: *id,
            kind: tower.kind,
            level: tower.level,
            position: *pos,
            range: weapon.range * mods.range_multiplier,
            damage: weapon.damage,
            aim: tower.aim,
            target: weapon.target,
        })
        .collect();

    towers.sort_by_key(|t| t.tower_id.0);
    towers
}

fn build_projectiles(pool: &ProjectilePool) -> Vec<ProjectileView> {
    pool.iter()
        .map(|p| ProjectileView {
            position: p.position,
            crit: p.crit,
        })
        .collect()
}
