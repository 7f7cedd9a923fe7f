//! Wave scheduling: staged group spawning with cumulative start offsets.
//!
//! Each wave is a sequence of groups. Group `g` starts after every earlier
//! group has had time to fully spawn (`sum(count * delay)` of the groups
//! before it) and then releases one enemy per `delay_ms`, at most one per
//! tick per group.

use pathbreak_core::enums::EnemyKind;

/// One homogeneous burst of enemies within a wave.
#[derive(Debug, Clone)]
pub struct WaveGroup {
    pub kind: EnemyKind,
    pub count: u32,
    pub delay_ms: f64,
}

/// A single wave definition.
#[derive(Debug, Clone)]
pub struct WaveDef {
    pub groups: Vec<WaveGroup>,
    /// Gold paid on completion (before the gold multiplier).
    pub reward: u32,
}

impl WaveDef {
    pub fn total_enemies(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }
}

/// Runtime spawn state for the wave in progress.
#[derive(Debug, Clone)]
pub struct WaveRuntime {
    pub wave: u32,
    pub def: WaveDef,
    pub started_at_ms: f64,
    /// Per group: elapsed-ms timestamp of the last spawn. Initialized to
    /// `group_start - delay` so the first member is due exactly at the
    /// group start.
    last_spawn_ms: Vec<f64>,
    spawned: Vec<u32>,
    pub all_spawned: bool,
}

fn group(kind: EnemyKind, count: u32, delay_ms: f64) -> WaveGroup {
    WaveGroup {
        kind,
        count,
        delay_ms,
    }
}

/// Wave table. Positional: the final entry is the boss wave, reached as
/// the run's eleventh wave.
pub fn wave_def(wave: u32) -> Option<WaveDef> {
    use EnemyKind::*;
    let def = match wave {
        1 => WaveDef {
            groups: vec![group(Runner, 5, 500.0), group(Swarm, 3, 800.0)],
            reward: 20,
        },
        2 => WaveDef {
            groups: vec![group(Runner, 8, 400.0), group(Swarm, 5, 600.0)],
            reward: 25,
        },
        3 => WaveDef {
            groups: vec![group(Runner, 10, 400.0), group(Swarm, 8, 500.0)],
            reward: 30,
        },
        4 => WaveDef {
            groups: vec![
                group(Runner, 8, 400.0),
                group(Tank, 2, 1000.0),
                group(Swarm, 10, 500.0),
            ],
            reward: 40,
        },
        5 => WaveDef {
            groups: vec![
                group(Runner, 12, 350.0),
                group(Tank, 3, 800.0),
                group(Swarm, 12, 400.0),
            ],
            reward: 45,
        },
        6 => WaveDef {
            groups: vec![
                group(Runner, 15, 300.0),
                group(Tank, 4, 700.0),
                group(Swarm, 15, 350.0),
            ],
            reward: 50,
        },
        7 => WaveDef {
            groups: vec![
                group(Runner, 20, 250.0),
                group(Tank, 5, 600.0),
                group(Swarm, 20, 300.0),
            ],
            reward: 60,
        },
        8 => WaveDef {
            groups: vec![
                group(Runner, 25, 200.0),
                group(Tank, 6, 500.0),
                group(Swarm, 25, 250.0),
            ],
            reward: 70,
        },
        9 => WaveDef {
            groups: vec![
                group(Runner, 30, 200.0),
                group(Tank, 8, 400.0),
                group(Swarm, 30, 200.0),
            ],
            reward: 80,
        },
        10 => WaveDef {
            groups: vec![
                group(Runner, 15, 300.0),
                group(Tank, 3, 800.0),
                group(Swarm, 20, 250.0),
                group(MiniBoss, 1, 2000.0),
            ],
            reward: 100,
        },
        11 => WaveDef {
            groups: vec![
                group(Runner, 20, 250.0),
                group(Tank, 5, 600.0),
                group(Swarm, 30, 200.0),
                group(Boss, 1, 3000.0),
            ],
            reward: 300,
        },
        _ => return None,
    };
    Some(def)
}

impl WaveRuntime {
    /// Start the given wave. Returns `None` past the end of the table (the
    /// terminal signal).
    pub fn start(wave: u32, now_ms: f64) -> Option<Self> {
        let def = wave_def(wave)?;
        let mut last_spawn_ms = Vec::with_capacity(def.groups.len());
        let mut cumulative = 0.0;
        for g in &def.groups {
            last_spawn_ms.push(cumulative - g.delay_ms);
            cumulative += f64::from(g.count) * g.delay_ms;
        }
        let spawned = vec![0; def.groups.len()];
        Some(Self {
            wave,
            def,
            started_at_ms: now_ms,
            last_spawn_ms,
            spawned,
            all_spawned: false,
        })
    }

    /// Cumulative start offset of a group within the wave.
    pub fn group_start_ms(&self, group_index: usize) -> f64 {
        self.def.groups[..group_index]
            .iter()
            .map(|g| f64::from(g.count) * g.delay_ms)
            .sum()
    }

    pub fn spawned_count(&self) -> u32 {
        self.spawned.iter().sum()
    }
}

/// Collect the enemies due to spawn this tick, in ascending group order.
/// At most one enemy per group per call.
pub fn run(runtime: &mut WaveRuntime, now_ms: f64) -> Vec<EnemyKind> {
    let elapsed = now_ms - runtime.started_at_ms;
    let mut due = Vec::new();

    for index in 0..runtime.def.groups.len() {
        let group = &runtime.def.groups[index];
        if runtime.spawned[index] >= group.count {
            continue;
        }
        if elapsed < runtime.group_start_ms(index) {
            continue;
        }
        if elapsed - runtime.last_spawn_ms[index] >= group.delay_ms {
            runtime.spawned[index] += 1;
            runtime.last_spawn_ms[index] = elapsed;
            due.push(group.kind);
        }
    }

    if !runtime.all_spawned {
        runtime.all_spawned = runtime
            .def
            .groups
            .iter()
            .enumerate()
            .all(|(i, g)| runtime.spawned[i] >= g.count);
    }

    due
}
