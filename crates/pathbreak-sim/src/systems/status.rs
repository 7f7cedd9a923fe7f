//! Status effect timers and burn damage.
//!
//! Runs before movement each tick: decrements freeze/stun/burn timers,
//! clears expired flags, and applies burn damage once per whole second of
//! remaining burn time crossed. Slows have no timer; they persist.

use hecs::World;

use pathbreak_core::components::{BossState, Defense, Health, StatusEffects};
use pathbreak_core::constants::BURN_TICK_MS;
use pathbreak_core::enums::DamageKind;

use crate::damage::apply_damage;

pub fn run(world: &mut World, dt_ms: f64) {
    for (_entity, (status, health, defense, boss)) in world.query_mut::<(
        &mut StatusEffects,
        &mut Health,
        &Defense,
        Option<&mut BossState>,
    )>() {
        if health.health <= 0.0 {
            continue;
        }

        if status.frozen {
            status.freeze_ms -= dt_ms;
            if status.freeze_ms <= 0.0 {
                status.frozen = false;
                status.freeze_ms = 0.0;
            }
        }

        if status.stunned {
            status.stun_ms -= dt_ms;
            if status.stun_ms <= 0.0 {
                status.stunned = false;
                status.stun_ms = 0.0;
            }
        }

        if status.burning {
            status.burn_ms -= dt_ms;
            if status.burn_ms <= 0.0 {
                status.burning = false;
                status.burn_ms = 0.0;
                status.burn_damage = 0.0;
            } else if crossed_burn_tick(status.burn_ms, dt_ms) {
                apply_damage(health, defense, boss, status.burn_damage, DamageKind::Magic);
            }
        }
    }
}

/// True when the decrement just crossed a whole-second boundary of the
/// remaining burn time.
fn crossed_burn_tick(remaining_ms: f64, dt_ms: f64) -> bool {
    (remaining_ms / BURN_TICK_MS).floor() != ((remaining_ms + dt_ms) / BURN_TICK_MS).floor()
}
