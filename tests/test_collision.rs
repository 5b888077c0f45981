use glam::Vec2;
use laser_dodger::collision::{first_hit, Rect};
use laser_dodger::entities::{Player, Projectile};

fn laser(x: f32, y: f32) -> Projectile {
    Projectile {
        pos: Vec2::new(x, y),
        size: 20.0,
        vel: Vec2::ZERO,
        active: true,
    }
}

#[test]
fn centered_rect_extends_half_size_each_way() {
    let r = Rect::centered(Vec2::new(200.0, 610.0), 30.0);
    assert_eq!(r, Rect { x: 185.0, y: 595.0, w: 30.0, h: 30.0 });
}

#[test]
fn overlap_is_symmetric() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    let b = Rect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect { x: 0.0, y: 0.0, w: 100.0, h: 100.0 };
    let inner = Rect { x: 40.0, y: 40.0, w: 5.0, h: 5.0 };
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn touching_edges_overlap() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    let right = Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 };
    let below = Rect { x: 0.0, y: 10.0, w: 10.0, h: 10.0 };
    assert!(a.overlaps(&right));
    assert!(a.overlaps(&below));
}

#[test]
fn gap_on_one_axis_is_a_miss() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    let beside = Rect { x: 10.5, y: 0.0, w: 10.0, h: 10.0 };
    let under = Rect { x: 0.0, y: 10.5, w: 10.0, h: 10.0 };
    assert!(!a.overlaps(&beside));
    assert!(!a.overlaps(&under));
}

#[test]
fn laser_on_player_is_a_hit() {
    let player = Player::new();
    assert_eq!(first_hit(&player, &[laser(200.0, 610.0)]), Some(0));
}

#[test]
fn laser_touching_player_edge_is_a_hit() {
    // player box spans x 185..215, laser box 215..235
    let player = Player::new();
    assert_eq!(first_hit(&player, &[laser(225.0, 610.0)]), Some(0));
}

#[test]
fn laser_just_past_player_edge_misses() {
    let player = Player::new();
    assert_eq!(first_hit(&player, &[laser(226.0, 610.0)]), None);
    assert_eq!(first_hit(&player, &[laser(200.0, 571.0)]), None);
}

#[test]
fn inactive_slots_never_hit() {
    let player = Player::new();
    let mut dead = laser(200.0, 610.0);
    dead.active = false;
    assert_eq!(first_hit(&player, &[dead]), None);
}

#[test]
fn first_hit_follows_slot_order() {
    let player = Player::new();
    let mut dead = laser(200.0, 610.0);
    dead.active = false;
    let slots = [dead, laser(50.0, 50.0), laser(205.0, 612.0), laser(200.0, 610.0)];
    assert_eq!(first_hit(&player, &slots), Some(2));
}
