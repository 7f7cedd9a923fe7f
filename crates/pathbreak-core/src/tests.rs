#[cfg(test)]
mod tests {
    use crate::artifacts::{ArtifactEffect, ModificationSet, CATALOG};
    use crate::commands::PlayerCommand;
    use crate::components::{EnemyId, StatusEffects, TowerId};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Runner,
            EnemyKind::Tank,
            EnemyKind::Swarm,
            EnemyKind::MiniBoss,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_tower_kind_serde() {
        let variants = vec![
            TowerKind::Archer,
            TowerKind::Freeze,
            TowerKind::Cannon,
            TowerKind::Mage,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TowerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::ArtifactSelect,
            GamePhase::Preparation,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::Victory,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::PlaceTower {
            kind: TowerKind::Cannon,
            x: 120.0,
            y: 80.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(
            json.contains("\"type\":\"PlaceTower\""),
            "commands serialize with a type tag: {json}"
        );
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        match back {
            PlayerCommand::PlaceTower { kind, x, y } => {
                assert_eq!(kind, TowerKind::Cannon);
                assert_eq!(x, 120.0);
                assert_eq!(y, 80.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_event_serde_tagged() {
        let event = GameEvent::EnemyKilled {
            enemy_id: EnemyId(7),
            kind: EnemyKind::Runner,
            position: Position::new(10.0, 20.0),
            reward: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"EnemyKilled\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            GameEvent::EnemyKilled {
                enemy_id: EnemyId(7),
                ..
            }
        ));
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wave, 0);
        assert_eq!(back.phase, GamePhase::MainMenu);
    }

    // ---- Types ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.range_to(&b), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(crate::constants::STEP_MS);
        time.advance(crate::constants::STEP_MS);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 2000.0 / 30.0).abs() < 1e-9);
    }

    // ---- Stat tables ----

    #[test]
    fn test_enemy_stats_table() {
        let runner = EnemyKind::Runner.stats();
        assert_eq!(runner.max_health, 50.0);
        assert_eq!(runner.speed, 2.5);
        assert_eq!(runner.reward, 5);

        let boss = EnemyKind::Boss.stats();
        assert_eq!(boss.max_health, 1000.0);
        assert_eq!(boss.armor, 15.0);
        assert_eq!(boss.reward, 200);
    }

    #[test]
    fn test_tower_stats_table() {
        let archer = TowerKind::Archer.stats();
        assert_eq!(archer.damage, 15.0);
        assert_eq!(archer.range, 120.0);
        assert_eq!(archer.cost, 50);
        assert_eq!(archer.crit_chance, 0.1);

        let cannon = TowerKind::Cannon.stats();
        assert!(cannon.can_stun);
        assert_eq!(cannon.splash_radius, Some(30.0));
        assert_eq!(cannon.armor_pen, 5.0);

        let mage = TowerKind::Mage.stats();
        assert_eq!(mage.damage_kind, DamageKind::Magic);
        assert_eq!(mage.magic_pen, 3.0);
    }

    #[test]
    fn test_status_effects_default_is_clean() {
        let status = StatusEffects::default();
        assert_eq!(status.slow_multiplier, 1.0);
        assert!(!status.frozen && !status.stunned && !status.burning);
    }

    // ---- Artifacts ----

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate artifact id {:?}", a.id);
            }
        }
        assert_eq!(CATALOG.len(), 12);
    }

    #[test]
    fn test_artifact_def_lookup() {
        let def = ArtifactId::ChainReaction.def();
        match def.effect {
            ArtifactEffect::DeathExplosion { damage, radius } => {
                assert_eq!(damage, 20.0);
                assert_eq!(radius, 50.0);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn test_modification_set_identity() {
        let set = ModificationSet::default();
        assert_eq!(set.damage_multiplier, 1.0);
        assert_eq!(set.crit_chance_bonus, 0.0);
        assert_eq!(set.fire_rate_multiplier, 1.0);
        assert_eq!(set.range_multiplier, 1.0);
        assert_eq!(set.armor_pen_multiplier, 1.0);
        assert_eq!(set.gold_multiplier, 1.0);
        assert_eq!(set.upgrade_cost_multiplier, 1.0);
    }

    /// Folding order never matters: two damage multipliers combine to the
    /// same product either way.
    #[test]
    fn test_modification_fold_commutes() {
        let a = ArtifactEffect::DamageVsFrozen(1.2);
        let b = ArtifactEffect::DamageVsFrozen(1.25);

        let mut forward = ModificationSet::default();
        forward.fold(&a, true);
        forward.fold(&b, true);

        let mut reverse = ModificationSet::default();
        reverse.fold(&b, true);
        reverse.fold(&a, true);

        assert_eq!(forward, reverse);
        assert!((forward.damage_multiplier - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_frozen_bonus_requires_frozen_target() {
        let mut set = ModificationSet::default();
        set.fold(&ArtifactEffect::DamageVsFrozen(1.2), false);
        assert_eq!(set.damage_multiplier, 1.0);
    }

    #[test]
    fn test_ids_are_plain_numbers_in_json() {
        let json = serde_json::to_string(&EnemyId(3)).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&TowerId(9)).unwrap();
        assert_eq!(json, "9");
    }
}
