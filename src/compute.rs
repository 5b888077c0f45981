/// Game-logic functions.
///
/// Movement helpers take an immutable reference and return a new value.
/// The frame entry point `advance` takes the whole `Game` by value and hands
/// it back, so a frame has a single writer. Randomness comes only from the
/// injected RNG.

use glam::Vec2;
use rand::Rng;

use crate::collision::first_hit;
use crate::consts::*;
use crate::entities::{Direction, Enemy, FrameInput, Game, GamePhase, Player, Sound};
use crate::pool::ProjectilePool;

// ── Random ranges ─────────────────────────────────────────────────────────────

/// Inclusive integer draw, widened to `f32`.
fn roll(rng: &mut impl Rng, (lo, hi): (i32, i32)) -> f32 {
    rng.gen_range(lo..=hi) as f32
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A freshly randomized enemy. `speed` and `timer_ms` are inclusive ranges.
pub fn spawn_enemy(rng: &mut impl Rng, speed: (i32, i32), timer_ms: (i32, i32)) -> Enemy {
    let x = roll(rng, (0, (SCREEN_WIDTH - ENEMY_SIZE) as i32));
    let direction = if rng.gen_bool(0.5) {
        Direction::Left
    } else {
        Direction::Right
    };
    Enemy {
        pos: Vec2::new(x, ENEMY_Y),
        size: ENEMY_SIZE,
        speed: roll(rng, speed),
        direction,
        shoot_timer_ms: roll(rng, timer_ms),
        can_shoot: true,
    }
}

/// Build the game as it is on launch: title screen, opening enemy.
pub fn init_game(rng: &mut impl Rng) -> Game {
    Game {
        phase: GamePhase::Intro,
        player: Player::new(),
        enemy: spawn_enemy(rng, OPENING_ENEMY_SPEED, OPENING_SHOOT_TIMER_MS),
        projectiles: ProjectilePool::new(),
        countdown: COUNTDOWN_FRAMES,
        round_origin: 0.0,
        round_seconds: 0,
        show_actors: false,
        sounds: Vec::new(),
        frame: 0,
    }
}

/// Number shown during the countdown.
pub fn countdown_display(counter: i32) -> i32 {
    let fps = TARGET_FPS as i32;
    (counter.max(0) + fps - 1) / fps
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The bound is checked before the step, so a step may overshoot it by less
/// than `speed`.
pub fn move_player_left(player: &Player) -> Player {
    if player.pos.x > player.size / 2.0 {
        Player {
            pos: Vec2::new(player.pos.x - player.speed, player.pos.y),
            ..*player
        }
    } else {
        *player
    }
}

pub fn move_player_right(player: &Player) -> Player {
    if player.pos.x < SCREEN_WIDTH - player.size / 2.0 {
        Player {
            pos: Vec2::new(player.pos.x + player.speed, player.pos.y),
            ..*player
        }
    } else {
        *player
    }
}

/// Apply both held directions independently; opposite keys can cancel.
pub fn steer_player(player: &Player, move_left: bool, move_right: bool) -> Player {
    let mut player = *player;
    if move_left {
        player = move_player_left(&player);
    }
    if move_right {
        player = move_player_right(&player);
    }
    player
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// One step of the horizontal patrol, bouncing off both screen edges.
pub fn move_enemy(enemy: &Enemy) -> Enemy {
    let mut x = enemy.pos.x + enemy.speed * enemy.direction.sign();
    let mut direction = enemy.direction;
    if x <= 0.0 {
        x = 0.0;
        direction = Direction::Right;
    } else if x + enemy.size >= SCREEN_WIDTH {
        x = SCREEN_WIDTH - enemy.size;
        direction = Direction::Left;
    }
    Enemy {
        pos: Vec2::new(x, enemy.pos.y),
        direction,
        ..*enemy
    }
}

/// Run the shoot timer down by the frame time; arm the gun and re-roll the
/// timer once it runs out.
pub fn tick_shoot_timer(enemy: &Enemy, frame_ms: f32, rng: &mut impl Rng) -> Enemy {
    let remaining = enemy.shoot_timer_ms - frame_ms;
    if remaining <= 0.0 {
        Enemy {
            shoot_timer_ms: roll(rng, SHOOT_INTERVAL_MS),
            can_shoot: true,
            ..*enemy
        }
    } else {
        Enemy {
            shoot_timer_ms: remaining,
            ..*enemy
        }
    }
}

/// Fire at most one laser if the gun is armed. The gun is disarmed either
/// way; with no free slot the shot is lost. Returns the slot used.
pub fn enemy_fire(
    enemy: &mut Enemy,
    projectiles: &mut ProjectilePool,
    rng: &mut impl Rng,
) -> Option<usize> {
    if !enemy.can_shoot {
        return None;
    }
    enemy.can_shoot = false;
    let vel = Vec2::new(0.0, roll(rng, PROJECTILE_SPEED));
    let slot = projectiles.activate(enemy.pos, PROJECTILE_SIZE, vel);
    match slot {
        Some(i) => log::trace!("laser fired into slot {i} at x={:.1}", enemy.pos.x),
        None => log::debug!("projectile pool full, shot dropped"),
    }
    slot
}

// ── Per-frame state machine ──────────────────────────────────────────────────

/// Advance the game by one frame. Exactly one phase handler runs, and a
/// transition takes effect before the next call.
pub fn advance(mut game: Game, input: &FrameInput, rng: &mut impl Rng) -> Game {
    game.sounds.clear();
    game.frame += 1;
    match game.phase {
        GamePhase::Intro => intro(game, input),
        GamePhase::Countdown => countdown(game, input),
        GamePhase::Gameplay => gameplay(game, input, rng),
        GamePhase::GameOver => game_over(game, input, rng),
    }
}

fn intro(mut game: Game, input: &FrameInput) -> Game {
    if input.start {
        log::info!("start pressed, counting down");
        game.phase = GamePhase::Countdown;
        game.sounds.push(Sound::Countdown);
        game.show_actors = true;
    }
    game
}

fn countdown(mut game: Game, input: &FrameInput) -> Game {
    game.countdown -= 1;
    if game.countdown < 0 {
        log::info!("round started at t={:.3}s", input.now);
        game.phase = GamePhase::Gameplay;
        game.round_origin = input.now;
        game.round_seconds = 0;
    }
    game
}

fn gameplay(mut game: Game, input: &FrameInput, rng: &mut impl Rng) -> Game {
    game.round_seconds = (input.now - game.round_origin).max(0.0) as u32;

    game.player = steer_player(&game.player, input.move_left, input.move_right);

    game.enemy = move_enemy(&game.enemy);
    game.enemy = tick_shoot_timer(&game.enemy, input.frame_ms, rng);
    if enemy_fire(&mut game.enemy, &mut game.projectiles, rng).is_some() {
        game.sounds.push(Sound::Laser);
    }

    game.projectiles.update();

    if let Some(slot) = first_hit(&game.player, game.projectiles.slots()) {
        log::info!(
            "player hit by slot {slot}, survived {} seconds",
            game.round_seconds
        );
        game.phase = GamePhase::GameOver;
        game.sounds.push(Sound::GameOver);
    }
    game
}

fn game_over(game: Game, input: &FrameInput, rng: &mut impl Rng) -> Game {
    if input.restart {
        restart(game, rng)
    } else {
        game
    }
}

/// Reset everything a round touches and go back to the countdown.
pub fn restart(game: Game, rng: &mut impl Rng) -> Game {
    log::info!("restarting after {} seconds", game.round_seconds);
    let mut projectiles = game.projectiles;
    projectiles.clear();
    let mut sounds = game.sounds;
    sounds.push(Sound::Countdown);
    Game {
        phase: GamePhase::Countdown,
        player: Player::new(),
        enemy: spawn_enemy(rng, REMATCH_ENEMY_SPEED, REMATCH_SHOOT_TIMER_MS),
        projectiles,
        countdown: COUNTDOWN_FRAMES,
        round_seconds: 0,
        sounds,
        ..game
    }
}
