//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid commands (wrong phase, not enough gold, stale ids)
//! are silent no-ops rather than errors.

use serde::{Deserialize, Serialize};

use crate::components::TowerId;
use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run control ---
    /// Start a new run from the main menu.
    StartRun,
    /// Pick one of the offered artifacts.
    ChooseArtifact { artifact: ArtifactId },
    /// Arm the next wave from the preparation phase.
    StartWave,
    /// Return to the main menu from a finished run.
    ReturnToMenu,

    // --- Towers ---
    /// Build a tower at the given position.
    PlaceTower { kind: TowerKind, x: f64, y: f64 },
    /// Upgrade a tower one level.
    UpgradeTower { tower_id: TowerId },
    /// Sell a tower for a partial refund.
    SellTower { tower_id: TowerId },

    // --- Emergency ---
    /// Spend a panic token: clears the field at a score penalty.
    UsePanicToken,

    // --- Simulation control ---
    /// Set time scale (1.0 = normal).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
