use glam::Vec2;
use laser_dodger::consts::MAX_PROJECTILES;
use laser_dodger::pool::{on_screen, ProjectilePool};

fn fill(pool: &mut ProjectilePool) {
    for _ in 0..MAX_PROJECTILES {
        pool.activate(Vec2::new(100.0, 100.0), 20.0, Vec2::new(0.0, 5.0));
    }
}

#[test]
fn new_pool_is_empty() {
    let pool = ProjectilePool::new();
    assert_eq!(pool.capacity(), 50);
    assert_eq!(pool.slots().len(), 50);
    assert_eq!(pool.active_count(), 0);
    assert_eq!(pool.first_free(), Some(0));
}

#[test]
fn activate_takes_lowest_free_slot() {
    let mut pool = ProjectilePool::new();
    assert_eq!(pool.activate(Vec2::ZERO, 20.0, Vec2::Y), Some(0));
    assert_eq!(pool.activate(Vec2::ZERO, 20.0, Vec2::Y), Some(1));
    assert_eq!(pool.activate(Vec2::ZERO, 20.0, Vec2::Y), Some(2));

    pool.slot_mut(1).unwrap().active = false;
    assert_eq!(pool.activate(Vec2::ZERO, 20.0, Vec2::Y), Some(1));
    assert_eq!(pool.active_count(), 3);
}

#[test]
fn activate_overwrites_stale_fields() {
    let mut pool = ProjectilePool::new();
    {
        let slot = pool.slot_mut(0).unwrap();
        slot.pos = Vec2::new(999.0, 999.0);
        slot.vel = Vec2::new(3.0, -4.0);
        slot.size = 1.0;
    }
    pool.activate(Vec2::new(10.0, 50.0), 20.0, Vec2::new(0.0, 9.0));

    let p = pool.slots()[0];
    assert!(p.active);
    assert_eq!(p.pos, Vec2::new(10.0, 50.0));
    assert_eq!(p.vel, Vec2::new(0.0, 9.0));
    assert_eq!(p.size, 20.0);
}

#[test]
fn full_pool_drops_new_shots() {
    let mut pool = ProjectilePool::new();
    fill(&mut pool);
    assert_eq!(pool.active_count(), MAX_PROJECTILES);
    assert_eq!(pool.first_free(), None);
    assert_eq!(pool.activate(Vec2::ZERO, 20.0, Vec2::Y), None);
    assert_eq!(pool.active_count(), MAX_PROJECTILES);
}

#[test]
fn update_integrates_velocity() {
    let mut pool = ProjectilePool::new();
    pool.activate(Vec2::new(100.0, 100.0), 20.0, Vec2::new(0.0, 10.0));
    pool.update();
    assert_eq!(pool.slots()[0].pos, Vec2::new(100.0, 110.0));
    assert!(pool.slots()[0].active);
}

#[test]
fn update_leaves_inactive_slots_alone() {
    let mut pool = ProjectilePool::new();
    {
        let slot = pool.slot_mut(4).unwrap();
        slot.pos = Vec2::new(100.0, 100.0);
        slot.vel = Vec2::new(0.0, 10.0);
    }
    pool.update();
    assert_eq!(pool.slots()[4].pos, Vec2::new(100.0, 100.0));
}

#[test]
fn leaving_the_bottom_deactivates() {
    let mut pool = ProjectilePool::new();
    pool.activate(Vec2::new(100.0, 645.0), 20.0, Vec2::new(0.0, 10.0));
    pool.update();
    let p = pool.slots()[0];
    assert!(!p.active);
    // Deactivation only clears the flag
    assert_eq!(p.pos, Vec2::new(100.0, 655.0));
}

#[test]
fn leaving_any_side_deactivates() {
    let mut pool = ProjectilePool::new();
    pool.activate(Vec2::new(100.0, 5.0), 20.0, Vec2::new(0.0, -10.0));
    pool.activate(Vec2::new(2.0, 100.0), 20.0, Vec2::new(-5.0, 0.0));
    pool.activate(Vec2::new(398.0, 100.0), 20.0, Vec2::new(5.0, 0.0));
    pool.activate(Vec2::new(200.0, 300.0), 20.0, Vec2::new(0.0, 5.0));
    pool.update();
    assert!(!pool.slots()[0].active);
    assert!(!pool.slots()[1].active);
    assert!(!pool.slots()[2].active);
    assert!(pool.slots()[3].active);
}

#[test]
fn clear_frees_every_slot() {
    let mut pool = ProjectilePool::new();
    fill(&mut pool);
    pool.clear();
    assert_eq!(pool.active_count(), 0);
    pool.clear();
    assert_eq!(pool.first_free(), Some(0));
}

#[test]
fn screen_edges_count_as_on_screen() {
    assert!(on_screen(Vec2::new(0.0, 0.0)));
    assert!(on_screen(Vec2::new(400.0, 650.0)));
    assert!(!on_screen(Vec2::new(-0.1, 10.0)));
    assert!(!on_screen(Vec2::new(10.0, 650.1)));
}
