//! Boss phase machine: forward-only phase transitions, the low-health
//! rage trigger, and periodic summon volleys.

use hecs::World;

use pathbreak_core::components::{BossState, Defense, EnemyId, Health, PathFollower};
use pathbreak_core::constants::*;
use pathbreak_core::enums::EnemyKind;
use pathbreak_core::events::GameEvent;

/// A summon to be spawned by the engine at the boss's current waypoint.
#[derive(Debug, Clone, Copy)]
pub struct SummonRequest {
    pub kind: EnemyKind,
    pub path_index: usize,
}

/// Advance every boss's phase machine. Returns summon requests; the
/// engine spawns them so enemy ids stay monotonic.
pub fn run(world: &mut World, now_ms: f64, events: &mut Vec<GameEvent>) -> Vec<SummonRequest> {
    let mut summons = Vec::new();

    for (_entity, (id, health, defense, follower, boss)) in world.query_mut::<(
        &EnemyId,
        &Health,
        &mut Defense,
        &mut PathFollower,
        &mut BossState,
    )>() {
        if health.health <= 0.0 || follower.reached_end {
            continue;
        }

        let health_frac = health.health / health.max;

        // Phase check. Transitions only move forward, and a multi-phase
        // jump applies the transition bump once (so a straight jump to
        // phase 3 never grants the phase-2 shield).
        let target_phase =
            ((((1.0 - health_frac) * f64::from(BOSS_PHASE_COUNT)).ceil() as u8) + 1)
                .min(BOSS_PHASE_COUNT);
        if target_phase > boss.phase {
            boss.phase = target_phase;
            follower.speed *= BOSS_PHASE_SPEED_MULT;
            defense.armor += BOSS_PHASE_ARMOR_BONUS;
            defense.magic_resist += BOSS_PHASE_MR_BONUS;
            match boss.phase {
                2 => {
                    boss.shield_active = true;
                    boss.shield_health = BOSS_SHIELD_HEALTH;
                    boss.max_shield_health = BOSS_SHIELD_HEALTH;
                }
                3 => {
                    if !boss.rage_mode {
                        boss.rage_mode = true;
                        follower.speed *= BOSS_RAGE_SPEED_MULT;
                    }
                }
                _ => {}
            }
            events.push(GameEvent::BossPhaseChanged {
                enemy_id: *id,
                phase: boss.phase,
            });
        }

        // Rage also triggers between phase checks once health is low.
        if !boss.rage_mode && health_frac <= BOSS_RAGE_THRESHOLD {
            boss.rage_mode = true;
            follower.speed *= BOSS_RAGE_SPEED_MULT;
        }

        // Summon volley on cooldown; composition depends on phase.
        if now_ms - boss.last_summon_ms >= BOSS_SUMMON_COOLDOWN_MS {
            boss.last_summon_ms = now_ms;
            let volley: &[EnemyKind] = match boss.phase {
                1 => &[EnemyKind::Runner, EnemyKind::Runner],
                2 => &[EnemyKind::Tank, EnemyKind::Swarm, EnemyKind::Swarm],
                _ => &[
                    EnemyKind::Tank,
                    EnemyKind::Tank,
                    EnemyKind::Swarm,
                    EnemyKind::Swarm,
                    EnemyKind::Swarm,
                ],
            };
            for &kind in volley {
                summons.push(SummonRequest {
                    kind,
                    path_index: follower.path_index,
                });
            }
            events.push(GameEvent::BossSummoned {
                enemy_id: *id,
                count: volley.len() as u32,
            });
        }
    }

    summons
}
