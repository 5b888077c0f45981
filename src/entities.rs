/// All game entity types — pure data, no logic.

use glam::Vec2;

use crate::consts::*;
use crate::pool::ProjectilePool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start key.
    Intro,
    /// Frame countdown before a round.
    Countdown,
    /// Round in progress.
    Gameplay,
    /// Player was hit; waiting for the restart key.
    GameOver,
}

/// Sounds the shell is asked to play once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Countdown,
    Laser,
    GameOver,
}

/// Horizontal heading of the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// One pool slot. Stale fields of an inactive slot are meaningless; the
/// next activation overwrites all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projectile {
    /// Center of the square.
    pub pos: Vec2,
    /// Side length.
    pub size: f32,
    /// Added to `pos` every frame. Only `y` is ever non-zero.
    pub vel: Vec2,
    pub active: bool,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Center of the square; only `x` changes during a run.
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, PLAYER_Y),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    /// Shots leave from here; the bounce treats `x` as the left edge.
    /// Only `x` changes during a run.
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: Direction,
    /// Milliseconds until the next shot is allowed.
    pub shoot_timer_ms: f32,
    pub can_shoot: bool,
}

// ── Per-frame input ───────────────────────────────────────────────────────────

/// Everything the shell samples once per frame. Immutable for the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Time since the previous frame, in milliseconds.
    pub frame_ms: f32,
    /// Wall-clock seconds since the shell started.
    pub now: f64,
    /// Held signals.
    pub move_left: bool,
    pub move_right: bool,
    /// Pressed signals.
    pub start: bool,
    pub restart: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game. Moved into `compute::advance` each frame and handed
/// back, so there is exactly one writer.
#[derive(Clone, Debug)]
pub struct Game {
    pub phase: GamePhase,
    pub player: Player,
    pub enemy: Enemy,
    pub projectiles: ProjectilePool,
    /// Frames left in the countdown; Gameplay starts once it drops below zero.
    pub countdown: i32,
    /// Wall-clock second at which the current round started.
    pub round_origin: f64,
    /// Whole seconds survived; frozen once the round ends.
    pub round_seconds: u32,
    /// Player and enemy are hidden on the title screen.
    pub show_actors: bool,
    /// Sounds queued this frame; the shell drains them.
    pub sounds: Vec<Sound>,
    pub frame: u64,
}
