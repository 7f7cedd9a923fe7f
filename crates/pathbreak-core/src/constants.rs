//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Simulated milliseconds per tick at normal speed.
pub const STEP_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Time scale clamp bounds.
pub const MIN_TIME_SCALE: f64 = 0.25;
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Movement ---

/// World units moved per (speed * slow * ms). Speed stats are in the same
/// scale the original tables use, so a speed-2.5 runner covers ~250 units/s.
pub const MOVE_DISTANCE_SCALE: f64 = 0.1;

// --- Combat ---

/// Minimum damage any positive hit deals after mitigation.
pub const MIN_DAMAGE: f64 = 1.0;

/// Critical hits double the projectile damage.
pub const CRIT_MULTIPLIER: f64 = 2.0;

// --- Status effects ---

/// Slow applied by freeze-tower hits (movement multiplier).
pub const SLOW_MULTIPLIER: f64 = 0.5;

/// Nominal slow duration (ms). Slows currently persist for the enemy's
/// remaining lifetime; the duration is carried for the snapshot only.
pub const SLOW_DURATION_MS: f64 = 2000.0;

/// Freeze duration applied on hit (ms).
pub const FREEZE_DURATION_MS: f64 = 3000.0;

/// Stun duration applied on a successful stun roll (ms).
pub const STUN_DURATION_MS: f64 = 1000.0;

/// Chance for a stun-capable hit to stun.
pub const STUN_PROC_CHANCE: f64 = 0.3;

/// Burn deals its damage once per whole second of remaining burn time.
pub const BURN_TICK_MS: f64 = 1000.0;

// --- Towers ---

/// Maximum tower level.
pub const MAX_TOWER_LEVEL: u8 = 3;

/// Per-level damage growth factor: damage = base * (1 + 0.5 * (level - 1)).
pub const UPGRADE_DAMAGE_STEP: f64 = 0.5;

/// Per-level range growth factor: range = base * (1 + 0.2 * (level - 1)).
pub const UPGRADE_RANGE_STEP: f64 = 0.2;

/// Fraction of invested gold refunded on sale.
pub const SELL_REFUND_FACTOR: f64 = 0.7;

// --- Projectiles ---

/// Projectile flight speed (same speed scale as enemy movement).
pub const PROJECTILE_SPEED: f64 = 12.0;

/// Default projectile pool capacity.
pub const PROJECTILE_POOL_CAPACITY: usize = 100;

/// Projectiles that never connect expire after this long (ms).
pub const PROJECTILE_LIFETIME_MS: f64 = 4000.0;

/// Splash damage fraction of the primary hit.
pub const SPLASH_DAMAGE_FACTOR: f64 = 0.5;

// --- Boss ---

/// Number of boss phases.
pub const BOSS_PHASE_COUNT: u8 = 3;

/// Speed multiplier applied on each phase transition.
pub const BOSS_PHASE_SPEED_MULT: f64 = 1.2;

/// Armor and magic-resist gained on each phase transition.
pub const BOSS_PHASE_ARMOR_BONUS: f64 = 2.0;
pub const BOSS_PHASE_MR_BONUS: f64 = 2.0;

/// Shield granted on entering phase 2.
pub const BOSS_SHIELD_HEALTH: f64 = 200.0;

/// Health fraction at or below which the boss enrages.
pub const BOSS_RAGE_THRESHOLD: f64 = 0.3;

/// Speed multiplier applied when rage triggers.
pub const BOSS_RAGE_SPEED_MULT: f64 = 1.5;

/// Cooldown between boss summon volleys (ms of sim time).
pub const BOSS_SUMMON_COOLDOWN_MS: f64 = 10_000.0;

// --- Run state ---

/// Starting resources for a new run.
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_LIVES: u32 = 20;
pub const STARTING_PANIC_TOKENS: u32 = 1;

/// Lives never regenerate past this cap.
pub const MAX_LIVES: u32 = 20;

/// Score penalty for spending a panic token (score floors at zero).
pub const PANIC_SCORE_PENALTY: u64 = 100;

// --- Artifacts ---

/// Number of artifacts offered per selection.
pub const ARTIFACT_OFFER_COUNT: usize = 3;
