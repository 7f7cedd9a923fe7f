//! Gold economy lookups. Pure functions over the stat tables; the engine
//! owns the gold balance and treats every insufficient-funds case as a
//! silent no-op.

use pathbreak_core::constants::SELL_REFUND_FACTOR;
use pathbreak_core::enums::{EnemyKind, TowerKind};

/// Gold cost to build a tower.
pub fn build_cost(kind: TowerKind) -> u32 {
    kind.stats().cost
}

/// Base gold cost of one upgrade level (before artifact discounts).
pub fn upgrade_cost(kind: TowerKind) -> u32 {
    kind.stats().upgrade_cost
}

/// Refund for selling a tower: 70% of everything invested.
pub fn sell_value(kind: TowerKind, level: u8) -> u32 {
    let stats = kind.stats();
    let invested = stats.cost + u32::from(level.saturating_sub(1)) * stats.upgrade_cost;
    (f64::from(invested) * SELL_REFUND_FACTOR).floor() as u32
}

/// Gold dropped by a kill (before the gold multiplier).
pub fn kill_reward(kind: EnemyKind) -> u32 {
    kind.stats().reward
}
