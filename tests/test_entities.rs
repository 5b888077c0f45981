use laser_dodger::compute::init_game;
use laser_dodger::consts::*;
use laser_dodger::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GamePhase::Intro, GamePhase::Intro);
    assert_ne!(GamePhase::Gameplay, GamePhase::GameOver);
    assert_eq!(Sound::Laser, Sound::Laser);
    assert_ne!(Sound::Countdown, Sound::GameOver);

    let phase = GamePhase::Countdown;
    assert_eq!(phase.clone(), GamePhase::Countdown);
}

#[test]
fn direction_sign() {
    assert_eq!(Direction::Left.sign(), -1.0);
    assert_eq!(Direction::Right.sign(), 1.0);
}

#[test]
fn player_starts_centered_near_bottom() {
    let p = Player::new();
    assert_eq!(p.pos.x, SCREEN_WIDTH / 2.0);
    assert_eq!(p.pos.y, 610.0);
    assert_eq!(p.size, 30.0);
    assert_eq!(p.speed, 7.0);
    assert_eq!(Player::default(), p);
}

#[test]
fn default_projectile_is_inactive() {
    let p = Projectile::default();
    assert!(!p.active);
}

#[test]
fn game_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(42);
    let original = init_game(&mut rng);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99.0;
    cloned.countdown = 3;
    cloned.sounds.push(Sound::Laser);
    cloned.projectiles.slot_mut(0).unwrap().active = true;

    assert_eq!(original.player.pos.x, 200.0);
    assert_eq!(original.countdown, COUNTDOWN_FRAMES);
    assert!(original.sounds.is_empty());
    assert_eq!(original.projectiles.active_count(), 0);
}
