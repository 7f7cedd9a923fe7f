//! End-of-tick lifecycle: pay bounties for kills, charge lives for leaks,
//! and despawn settled enemies through the engine's despawn buffer.

use hecs::{Entity, World};

use pathbreak_core::components::{Bounty, Enemy, EnemyId, Health, PathFollower};
use pathbreak_core::events::GameEvent;
use pathbreak_core::types::Position;

/// Mutable run-state the lifecycle settles into.
pub struct RunLedger<'a> {
    pub gold: &'a mut u32,
    pub lives: &'a mut u32,
    pub score: &'a mut u64,
    pub gold_multiplier: f64,
}

pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    ledger: &mut RunLedger<'_>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    // Kills: pay once, then despawn.
    for (entity, (id, enemy, health, bounty, pos)) in
        world.query_mut::<(&EnemyId, &Enemy, &Health, &mut Bounty, &Position)>()
    {
        if health.health > 0.0 {
            continue;
        }
        if !bounty.collected {
            bounty.collected = true;
            let paid = (f64::from(bounty.reward) * ledger.gold_multiplier).floor() as u32;
            *ledger.gold += paid;
            *ledger.score += u64::from(paid);
            events.push(GameEvent::EnemyKilled {
                enemy_id: *id,
                kind: enemy.kind,
                position: *pos,
                reward: paid,
            });
        }
        despawn_buffer.push(entity);
    }

    // Leaks: one life each.
    for (entity, (id, enemy, health, follower)) in
        world.query_mut::<(&EnemyId, &Enemy, &Health, &PathFollower)>()
    {
        if health.health > 0.0 && follower.reached_end {
            *ledger.lives = ledger.lives.saturating_sub(1);
            events.push(GameEvent::EnemyLeaked {
                enemy_id: *id,
                kind: enemy.kind,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
