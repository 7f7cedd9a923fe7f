//! Fixed-capacity projectile pool.
//!
//! Projectiles are not ECS entities; they live in pre-sized slots owned by
//! the engine, the same way engagement records sit outside the world. A
//! slot holds a `hecs::Entity` target reference that is re-resolved every
//! tick, so a despawned target simply fails to resolve and the projectile
//! is discarded without dealing damage.

use std::collections::VecDeque;

use pathbreak_core::components::{EnemyId, TowerId};
use pathbreak_core::enums::DamageKind;
use pathbreak_core::types::Position;

/// An in-flight projectile. Every field is rewritten on slot reuse.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Position,
    pub speed: f64,
    pub damage: f64,
    pub damage_kind: DamageKind,
    pub crit: bool,
    pub armor_pen: f64,
    pub magic_pen: f64,
    pub splash_radius: Option<f64>,
    pub can_slow: bool,
    pub can_freeze: bool,
    pub can_stun: bool,
    pub can_burn: bool,
    pub burn_damage: f64,
    pub burn_duration_ms: f64,
    pub target: hecs::Entity,
    pub target_id: EnemyId,
    pub tower_id: TowerId,
    /// Remaining flight time before the projectile silently expires (ms).
    pub life_ms: f64,
}

/// Slot-reusing pool with oldest-first eviction at capacity.
#[derive(Debug)]
pub struct ProjectilePool {
    slots: Vec<Option<Projectile>>,
    /// Active slot indices, oldest first.
    order: VecDeque<usize>,
    free: Vec<usize>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            order: VecDeque::new(),
            free: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn active_count(&self) -> usize {
        self.order.len()
    }

    /// Book a projectile. Reuses a free slot when available; at capacity
    /// the oldest active projectile is evicted.
    pub fn spawn(&mut self, projectile: Projectile) {
        let index = if let Some(index) = self.free.pop() {
            index
        } else if self.slots.len() < self.capacity {
            self.slots.push(None);
            self.slots.len() - 1
        } else if let Some(oldest) = self.order.pop_front() {
            log::warn!("projectile pool at capacity, evicting oldest slot {oldest}");
            oldest
        } else {
            return;
        };

        // Whole-struct assignment: nothing from the previous occupant
        // survives.
        self.slots[index] = Some(projectile);
        self.order.push_back(index);
    }

    /// Release a slot back to the pool.
    pub fn release(&mut self, index: usize) {
        if index < self.slots.len() && self.slots[index].is_some() {
            self.slots[index] = None;
            self.order.retain(|&i| i != index);
            self.free.push(index);
        }
    }

    /// Active slot indices, oldest first. Cloned so systems can mutate the
    /// pool while walking the list.
    pub fn active_indices(&self) -> Vec<usize> {
        self.order.iter().copied().collect()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Projectile> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    /// Iterate active projectiles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.order
            .iter()
            .filter_map(move |&i| self.slots[i].as_ref())
    }

    /// Drop every projectile (wave completion, run reset).
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.order.clear();
        self.free = (0..self.slots.len()).collect();
    }
}
