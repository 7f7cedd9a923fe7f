//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless and single-threaded, enabling deterministic testing: the same
//! seed and command sequence always yields the same snapshot stream.

use std::collections::VecDeque;

use hecs::World;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pathbreak_core::artifacts::CATALOG;
use pathbreak_core::commands::PlayerCommand;
use pathbreak_core::components::*;
use pathbreak_core::constants::*;
use pathbreak_core::enums::{ArtifactId, GamePhase, TowerKind};
use pathbreak_core::events::GameEvent;
use pathbreak_core::state::GameStateSnapshot;
use pathbreak_core::types::{Position, SimTime};

use crate::pool::ProjectilePool;
use crate::progress::{NullProgress, ProgressStore, RunRecord};
use crate::systems;
use crate::systems::lifecycle::RunLedger;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::wave_spawner::WaveRuntime;
use crate::{economy, modifiers, scenario, world_setup};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Waypoint polyline enemies walk. Injected by the embedder; map
    /// generation is out of scope here.
    pub path: Vec<Position>,
    /// Projectile pool capacity.
    pub pool_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            path: scenario::default_path(),
            pool_capacity: PROJECTILE_POOL_CAPACITY,
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    path: Vec<Position>,
    next_enemy_id: u32,
    next_tower_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    pool: ProjectilePool,

    // --- Run state ---
    wave: u32,
    wave_runtime: Option<WaveRuntime>,
    gold: u32,
    lives: u32,
    score: u64,
    panic_tokens: u32,
    artifacts: Vec<ArtifactId>,
    offered_artifacts: Vec<ArtifactId>,

    progress: Box<dyn ProgressStore>,
    run_recorded: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            path: config.path,
            next_enemy_id: 0,
            next_tower_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            pool: ProjectilePool::new(config.pool_capacity),
            wave: 0,
            wave_runtime: None,
            gold: STARTING_GOLD,
            lives: STARTING_LIVES,
            score: 0,
            panic_tokens: STARTING_PANIC_TOKENS,
            artifacts: Vec::new(),
            offered_artifacts: Vec::new(),
            progress: Box::new(NullProgress),
            run_recorded: false,
        }
    }

    /// Replace the progress store (finished runs are recorded into it).
    pub fn set_progress_store(&mut self, store: Box<dyn ProgressStore>) {
        self.progress = store;
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Nothing advances while paused or between waves, so every
    /// timer in the game freezes with the clock.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            let dt_ms = STEP_MS * self.time_scale;
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
            self.check_wave_completion();
            self.check_defeat();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.pool,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                wave: self.wave,
                gold: self.gold,
                lives: self.lives,
                score: self.score,
                panic_tokens: self.panic_tokens,
                time_scale: self.time_scale,
                artifacts: &self.artifacts,
                offered_artifacts: &self.offered_artifacts,
                mods: modifiers::passive_set(&self.artifacts, false),
                events,
            },
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Anything invalid in the current
    /// phase is a silent no-op.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(
                    self.phase,
                    GamePhase::MainMenu | GamePhase::Victory | GamePhase::GameOver
                ) {
                    self.reset_run();
                    self.offer_artifacts();
                    self.phase = GamePhase::ArtifactSelect;
                }
            }
            PlayerCommand::ChooseArtifact { artifact } => {
                if self.phase == GamePhase::ArtifactSelect
                    && self.offered_artifacts.contains(&artifact)
                    && !self.artifacts.contains(&artifact)
                {
                    self.artifacts.push(artifact);
                    self.lives += modifiers::bonus_lives(&[artifact]);
                    self.offered_artifacts.clear();
                    self.events.push(GameEvent::ArtifactChosen { artifact });
                    self.phase = GamePhase::Preparation;
                }
            }
            PlayerCommand::StartWave => {
                if self.phase == GamePhase::Preparation {
                    let next = self.wave + 1;
                    match WaveRuntime::start(next, self.time.elapsed_ms) {
                        Some(runtime) => {
                            self.wave = next;
                            self.wave_runtime = Some(runtime);
                            self.phase = GamePhase::Playing;
                            self.events.push(GameEvent::WaveStarted { wave: next });
                        }
                        // Past the end of the table: the run is won.
                        None => self.finish_run(GamePhase::Victory),
                    }
                }
            }
            PlayerCommand::PlaceTower { kind, x, y } => {
                if matches!(self.phase, GamePhase::Preparation | GamePhase::Playing) {
                    self.place_tower(kind, Position::new(x, y));
                }
            }
            PlayerCommand::UpgradeTower { tower_id } => {
                if matches!(self.phase, GamePhase::Preparation | GamePhase::Playing) {
                    self.upgrade_tower(tower_id);
                }
            }
            PlayerCommand::SellTower { tower_id } => {
                if matches!(self.phase, GamePhase::Preparation | GamePhase::Playing) {
                    self.sell_tower(tower_id);
                }
            }
            PlayerCommand::UsePanicToken => {
                if self.phase == GamePhase::Playing && self.panic_tokens > 0 {
                    self.panic_tokens -= 1;
                    self.score = self.score.saturating_sub(PANIC_SCORE_PENALTY);
                    // Field wipe pays no bounties.
                    for (_entity, (health, bounty)) in
                        self.world.query_mut::<(&mut Health, &mut Bounty)>()
                    {
                        health.health = 0.0;
                        bounty.collected = true;
                    }
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Victory | GamePhase::GameOver) {
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        let now_ms = self.time.elapsed_ms;

        // 1. Wave spawning
        if let Some(runtime) = self.wave_runtime.as_mut() {
            for kind in systems::wave_spawner::run(runtime, now_ms) {
                self.next_enemy_id += 1;
                let id = EnemyId(self.next_enemy_id);
                world_setup::spawn_enemy(&mut self.world, kind, &self.path, 0, id, now_ms);
                self.events.push(GameEvent::EnemySpawned {
                    enemy_id: id,
                    kind,
                });
            }
        }
        // 2. Status-effect timers and burn damage
        systems::status::run(&mut self.world, dt_ms);
        // 3. Boss phase machine and summons
        let summons = systems::boss::run(&mut self.world, now_ms, &mut self.events);
        for summon in summons {
            self.next_enemy_id += 1;
            let id = EnemyId(self.next_enemy_id);
            world_setup::spawn_enemy(
                &mut self.world,
                summon.kind,
                &self.path,
                summon.path_index,
                id,
                now_ms,
            );
            self.events.push(GameEvent::EnemySpawned {
                enemy_id: id,
                kind: summon.kind,
            });
        }
        // 4. Path movement
        systems::movement::run(&mut self.world, &self.path, dt_ms);
        // 5. Targeting and firing
        systems::targeting::run(
            &mut self.world,
            &mut self.pool,
            &self.artifacts,
            &mut self.rng,
            now_ms,
            &mut self.events,
        );
        // 6. Projectile flight and hit resolution
        let mut splash = Vec::new();
        systems::projectiles::run(
            &mut self.world,
            &mut self.pool,
            &self.artifacts,
            &mut self.rng,
            dt_ms,
            &mut self.events,
            &mut splash,
        );
        // 7. Deferred splash and chain reactions
        systems::area_effect::run(&mut self.world, &splash, &self.artifacts);
        // 8. Lifecycle: bounties, leaks, despawn
        let gold_multiplier = modifiers::passive_set(&self.artifacts, false).gold_multiplier;
        systems::lifecycle::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut RunLedger {
                gold: &mut self.gold,
                lives: &mut self.lives,
                score: &mut self.score,
                gold_multiplier,
            },
            &mut self.events,
        );
    }

    /// Settle a finished wave: pay out, heal, advance or end the run.
    fn check_wave_completion(&mut self) {
        let Some(runtime) = self.wave_runtime.as_ref() else {
            return;
        };
        if !runtime.all_spawned {
            return;
        }
        let enemies_left = self.world.query::<&Enemy>().iter().count();
        if enemies_left > 0 {
            return;
        }

        let mods = modifiers::passive_set(&self.artifacts, false);
        let reward = (f64::from(runtime.def.reward) * mods.gold_multiplier).floor() as u32;
        self.gold += reward;
        self.score += u64::from(reward);
        let regen = modifiers::wave_regen(&self.artifacts);
        if regen > 0 {
            self.lives = (self.lives + regen).min(MAX_LIVES);
        }
        self.events.push(GameEvent::WaveCompleted {
            wave: self.wave,
            reward,
        });
        self.wave_runtime = None;
        self.pool.clear();

        if self.wave == 10 {
            // Mid-run artifact pick before the final stretch.
            self.offer_artifacts();
            self.phase = GamePhase::ArtifactSelect;
        } else if systems::wave_spawner::wave_def(self.wave + 1).is_none() {
            self.finish_run(GamePhase::Victory);
        } else {
            self.phase = GamePhase::Preparation;
        }
    }

    fn check_defeat(&mut self) {
        if self.phase == GamePhase::Playing && self.lives == 0 {
            self.pool.clear();
            self.finish_run(GamePhase::GameOver);
        }
    }

    /// End the run in the given phase and record it once.
    fn finish_run(&mut self, phase: GamePhase) {
        self.phase = phase;
        if !self.run_recorded {
            self.run_recorded = true;
            let record = RunRecord {
                score: self.score,
                wave: self.wave,
                artifacts: self.artifacts.clone(),
            };
            if let Err(err) = self.progress.record_run(&record) {
                log::warn!("failed to record run: {err}");
            }
        }
    }

    /// Reset all run state for a fresh start.
    fn reset_run(&mut self) {
        self.world.clear();
        self.pool.clear();
        self.time = SimTime::default();
        self.next_enemy_id = 0;
        self.next_tower_id = 0;
        self.wave = 0;
        self.wave_runtime = None;
        self.gold = STARTING_GOLD;
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.panic_tokens = STARTING_PANIC_TOKENS;
        self.artifacts.clear();
        self.offered_artifacts.clear();
        self.events.clear();
        self.run_recorded = false;
    }

    /// Draw distinct artifact offers from the un-owned pool.
    fn offer_artifacts(&mut self) {
        let mut available: Vec<ArtifactId> = CATALOG
            .iter()
            .map(|def| def.id)
            .filter(|id| !self.artifacts.contains(id))
            .collect();
        available.shuffle(&mut self.rng);
        available.truncate(ARTIFACT_OFFER_COUNT);
        self.offered_artifacts = available;
    }

    fn place_tower(&mut self, kind: TowerKind, position: Position) {
        let cost = economy::build_cost(kind);
        if self.gold < cost {
            return;
        }
        self.gold -= cost;
        self.next_tower_id += 1;
        world_setup::spawn_tower(&mut self.world, kind, position, TowerId(self.next_tower_id));
    }

    fn upgrade_tower(&mut self, tower_id: TowerId) {
        let mods = modifiers::passive_set(&self.artifacts, false);
        let Some(entity) = self.find_tower(tower_id) else {
            return;
        };
        let Ok((tower, weapon)) = self.world.query_one_mut::<(&mut Tower, &mut Weapon)>(entity)
        else {
            return;
        };
        if tower.level >= MAX_TOWER_LEVEL {
            return;
        }
        let cost =
            (f64::from(economy::upgrade_cost(tower.kind)) * mods.upgrade_cost_multiplier).floor()
                as u32;
        if self.gold < cost {
            return;
        }
        tower.level += 1;
        world_setup::apply_level(tower, weapon);
        self.gold -= cost;
    }

    fn sell_tower(&mut self, tower_id: TowerId) {
        let Some(entity) = self.find_tower(tower_id) else {
            return;
        };
        let Ok(tower) = self.world.query_one_mut::<&Tower>(entity) else {
            return;
        };
        let refund = economy::sell_value(tower.kind, tower.level);
        self.gold += refund;
        let _ = self.world.despawn(entity);
    }

    fn find_tower(&self, tower_id: TowerId) -> Option<hecs::Entity> {
        self.world
            .query::<&TowerId>()
            .iter()
            .find(|(_, id)| **id == tower_id)
            .map(|(entity, _)| entity)
    }

    // --- Test accessors ---

    #[cfg(test)]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    #[cfg(test)]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[cfg(test)]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[cfg(test)]
    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    #[cfg(test)]
    pub fn artifacts_mut(&mut self) -> &mut Vec<ArtifactId> {
        &mut self.artifacts
    }

    #[cfg(test)]
    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }

    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Spawn an enemy directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: pathbreak_core::enums::EnemyKind,
        path_index: usize,
    ) -> hecs::Entity {
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(
            &mut self.world,
            kind,
            &self.path,
            path_index,
            EnemyId(self.next_enemy_id),
            self.time.elapsed_ms,
        )
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
