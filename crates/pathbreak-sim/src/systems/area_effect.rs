//! Area damage resolution: deferred splash and chain-reaction explosions.
//!
//! Splash applies after every direct hit of the tick has landed, against
//! the post-resolution set of living, un-leaked enemies, excluding each
//! record's primary target. Every victim applies its own mitigation.
//! Splash never causes more splash; the only second-order area damage is
//! the chain-reaction artifact, which grants exactly one explosion per
//! enemy killed this tick (explosion kills queue their own, each enemy at
//! most once).

use std::collections::HashSet;

use hecs::World;

use pathbreak_core::components::{BossState, Defense, Enemy, Health, PathFollower};
use pathbreak_core::enums::{ArtifactId, DamageKind};
use pathbreak_core::types::Position;

use crate::damage::apply_damage;
use crate::modifiers;
use crate::systems::projectiles::SplashRecord;

pub fn run(world: &mut World, splash: &[SplashRecord], artifacts: &[ArtifactId]) {
    for record in splash {
        apply_area_damage(
            world,
            &record.position,
            record.damage,
            record.kind,
            record.radius,
            Some(record.primary),
        );
    }

    // Chain reactions. Any enemy dead at this point died this tick
    // (lifecycle despawned earlier corpses at the end of the last tick).
    let Some((damage, radius)) = modifiers::death_explosion(artifacts) else {
        return;
    };
    let mut exploded: HashSet<hecs::Entity> = HashSet::new();
    loop {
        let dead: Vec<(hecs::Entity, Position)> = world
            .query::<(&Enemy, &Health, &Position)>()
            .iter()
            .filter(|(entity, (_, health, _))| {
                health.health <= 0.0 && !exploded.contains(entity)
            })
            .map(|(entity, (_, _, pos))| (entity, *pos))
            .collect();
        if dead.is_empty() {
            break;
        }
        for (entity, position) in dead {
            exploded.insert(entity);
            apply_area_damage(world, &position, damage, DamageKind::Physical, radius, None);
        }
    }
}

/// Damage every living, un-leaked enemy within `radius` of `center`,
/// skipping `exclude`. Each victim mitigates with its own defenses.
fn apply_area_damage(
    world: &mut World,
    center: &Position,
    damage: f64,
    kind: DamageKind,
    radius: f64,
    exclude: Option<hecs::Entity>,
) {
    for (entity, (_, health, defense, follower, pos, boss)) in world.query_mut::<(
        &Enemy,
        &mut Health,
        &Defense,
        &PathFollower,
        &Position,
        Option<&mut BossState>,
    )>() {
        if Some(entity) == exclude {
            continue;
        }
        if health.health <= 0.0 || follower.reached_end {
            continue;
        }
        if center.range_to(pos) > radius {
            continue;
        }
        apply_damage(health, defense, boss, damage, kind);
    }
}
