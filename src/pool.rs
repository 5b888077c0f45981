//! Fixed-capacity projectile arena.
//!
//! Slots are addressed by index and never reallocated. A slot is free when
//! its `active` flag is clear; `activate` takes the lowest free index.

use glam::Vec2;

use crate::consts::{MAX_PROJECTILES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Projectile;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectilePool {
    slots: [Projectile; MAX_PROJECTILES],
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self {
            slots: [Projectile::default(); MAX_PROJECTILES],
        }
    }

    pub fn capacity(&self) -> usize {
        MAX_PROJECTILES
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    /// Direct slot access, for tests and scripted scenarios.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Projectile> {
        self.slots.get_mut(index)
    }

    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|p| !p.active)
    }

    /// Claim the first free slot and overwrite every field.
    /// Returns the slot index, or `None` when the pool is full.
    pub fn activate(&mut self, pos: Vec2, size: f32, vel: Vec2) -> Option<usize> {
        let index = self.first_free()?;
        self.slots[index] = Projectile {
            pos,
            size,
            vel,
            active: true,
        };
        Some(index)
    }

    /// Integrate every active slot and free those that left the screen.
    pub fn update(&mut self) {
        for p in self.slots.iter_mut().filter(|p| p.active) {
            p.pos += p.vel;
            if !on_screen(p.pos) {
                p.active = false;
            }
        }
    }

    pub fn clear(&mut self) {
        for p in self.slots.iter_mut() {
            p.active = false;
        }
    }
}

/// Inside the visible rectangle, edges included.
pub fn on_screen(pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= SCREEN_WIDTH && pos.y >= 0.0 && pos.y <= SCREEN_HEIGHT
}
