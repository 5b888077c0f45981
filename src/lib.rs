//! Laser Dodger - dodge the lasers a patrolling enemy drops on you.
//!
//! The library holds the whole game core; the binary is a thin terminal
//! shell that feeds it input and draws the result.
//!
//! - `entities`: pure data
//! - `pool`: fixed-capacity projectile arena
//! - `collision`: axis-aligned box overlap
//! - `compute`: per-frame update and the phase state machine

pub mod collision;
pub mod compute;
pub mod entities;
pub mod error;
pub mod pool;

pub use error::GameError;

/// Game configuration constants
pub mod consts {
    /// World width in world units
    pub const SCREEN_WIDTH: f32 = 400.0;
    /// World height in world units
    pub const SCREEN_HEIGHT: f32 = 650.0;
    /// Target frame rate; all per-frame speeds assume it
    pub const TARGET_FPS: u32 = 60;

    pub const PLAYER_SIZE: f32 = 30.0;
    /// Flat per-frame step
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_Y: f32 = SCREEN_HEIGHT - 40.0;

    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_Y: f32 = SCREEN_HEIGHT - 600.0;

    /// Enemy parameters at game creation
    pub const OPENING_ENEMY_SPEED: (i32, i32) = (7, 9);
    pub const OPENING_SHOOT_TIMER_MS: (i32, i32) = (300, 800);
    /// Enemy parameters after a restart
    pub const REMATCH_ENEMY_SPEED: (i32, i32) = (5, 7);
    pub const REMATCH_SHOOT_TIMER_MS: (i32, i32) = (500, 1000);
    /// Re-arm range once the shoot timer runs out
    pub const SHOOT_INTERVAL_MS: (i32, i32) = (300, 800);

    pub const MAX_PROJECTILES: usize = 50;
    pub const PROJECTILE_SIZE: f32 = 20.0;
    pub const PROJECTILE_SPEED: (i32, i32) = (5, 18);

    /// Countdown length in frames (about 4 s at 60 FPS)
    pub const COUNTDOWN_FRAMES: i32 = 245;
}
