//! Path movement system.
//!
//! Enemies advance along the waypoint polyline at
//! `speed * slow_multiplier * dt * MOVE_DISTANCE_SCALE` world units,
//! carrying leftover distance across segment boundaries. Frozen or stunned
//! enemies do not move at all. Reaching the final waypoint flags the leak;
//! the lifecycle system settles it.

use hecs::World;

use pathbreak_core::components::{Health, PathFollower, StatusEffects};
use pathbreak_core::constants::MOVE_DISTANCE_SCALE;
use pathbreak_core::types::Position;

pub fn run(world: &mut World, path: &[Position], dt_ms: f64) {
    for (_entity, (follower, status, pos, health)) in
        world.query_mut::<(&mut PathFollower, &StatusEffects, &mut Position, &Health)>()
    {
        if health.health <= 0.0 || follower.reached_end {
            continue;
        }
        if status.frozen || status.stunned {
            continue;
        }
        // Degenerate path: nothing to walk, the enemy leaks where it stands.
        if path.len() < 2 {
            follower.reached_end = true;
            continue;
        }

        let mut remaining = follower.speed * status.slow_multiplier * dt_ms * MOVE_DISTANCE_SCALE;
        while remaining > 0.0 {
            let Some(next) = path.get(follower.path_index + 1) else {
                follower.reached_end = true;
                break;
            };
            let here = pos.as_dvec2();
            let target = next.as_dvec2();
            let distance = here.distance(target);

            if distance <= remaining {
                *pos = *next;
                follower.path_index += 1;
                follower.distance_traveled += distance;
                remaining -= distance;
                if follower.path_index + 1 >= path.len() {
                    follower.reached_end = true;
                    break;
                }
            } else {
                let step = here + (target - here) / distance * remaining;
                *pos = Position::from_dvec2(step);
                follower.distance_traveled += remaining;
                break;
            }
        }
    }
}
