//! Axis-aligned box overlap between the player and the lasers.

use glam::Vec2;

use crate::entities::{Player, Projectile};

/// Axis-aligned rectangle, top-left corner plus extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Square of side `size` centered on `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self {
            x: center.x - size / 2.0,
            y: center.y - size / 2.0,
            w: size,
            h: size,
        }
    }

    /// True unless there is a gap on one of the axes. Touching edges count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.w
            && other.x <= self.x + self.w
            && self.y <= other.y + other.h
            && other.y <= self.y + self.h
    }
}

/// Index of the first active projectile touching the player, in slot order.
/// Scanning stops at that hit.
pub fn first_hit(player: &Player, projectiles: &[Projectile]) -> Option<usize> {
    let player_box = Rect::centered(player.pos, player.size);
    projectiles
        .iter()
        .position(|p| p.active && Rect::centered(p.pos, p.size).overlaps(&player_box))
}
