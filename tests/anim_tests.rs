// Host-side tests for trail, burst, shockwave and petal instances.

mod common;

use common::*;
use crystal_cursor::core::anim::{cubic_bezier, ease_petal};
use crystal_cursor::core::{Animation, Burst, Petal, Shockwave, Stage, Trail, VisualId, VisualKind};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn stage(pool: usize) -> (Stage<FakeSurface>, Clock) {
    let (surface, clock) = FakeSurface::new();
    (Stage::new(surface, pool), clock)
}

fn only_visual(stage: &Stage<FakeSurface>, kind: VisualKind) -> VisualId {
    let ids: Vec<_> = stage
        .surface()
        .kinds
        .iter()
        .filter(|(_, k)| **k == kind)
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(ids.len(), 1);
    ids[0]
}

#[test]
fn trail_decays_monotonically_and_returns_its_element_once() {
    let (mut stage, clock) = stage(4);
    let mut rng = StdRng::seed_from_u64(1);
    let mut trail = Trail::spawn(&mut stage, Vec2::new(100.0, 100.0), 0.0, &mut rng).unwrap();
    assert_eq!(stage.pool().in_use(), 1);
    assert_eq!(stage.surface().visible_of(VisualKind::Trail), 1);

    let mut last = trail.life();
    let mut steps = 0;
    loop {
        clock.advance(16.0);
        steps += 1;
        assert!(steps < 1_000, "trail never finished");
        if !trail.update(clock.now(), &mut stage) {
            break;
        }
        assert!(trail.life() < last, "life must decrease every tick");
        last = trail.life();
    }

    assert_eq!(stage.pool().in_use(), 0);
    assert_eq!(stage.surface().visible_of(VisualKind::Trail), 0);
    let released = stage.surface().released.clone();
    assert_eq!(released.len(), 1);

    // finished instances stay finished and never release twice
    clock.advance(16.0);
    assert!(!trail.update(clock.now(), &mut stage));
    trail.dispose(&mut stage);
    assert_eq!(stage.surface().released_count(released[0]), 1);
}

#[test]
fn trail_drifts_along_its_heading() {
    let (mut stage, clock) = stage(1);
    let mut rng = StdRng::seed_from_u64(2);
    let mut trail = Trail::spawn(&mut stage, Vec2::new(50.0, 50.0), 0.0, &mut rng).unwrap();
    for _ in 0..20 {
        clock.advance(16.0);
        assert!(trail.update(clock.now(), &mut stage));
    }
    let pos = trail.position();
    assert!(pos.x > 50.0);
    assert!((pos.y - 50.0).abs() < 1e-3);
}

#[test]
fn trail_decay_does_not_depend_on_frame_rate() {
    let (mut fast_stage, fast_clock) = stage(1);
    let (mut slow_stage, slow_clock) = stage(1);
    let mut fast =
        Trail::spawn(&mut fast_stage, Vec2::ZERO, 0.0, &mut StdRng::seed_from_u64(9)).unwrap();
    let mut slow =
        Trail::spawn(&mut slow_stage, Vec2::ZERO, 0.0, &mut StdRng::seed_from_u64(9)).unwrap();

    for _ in 0..40 {
        fast_clock.advance(10.0);
        assert!(fast.update(fast_clock.now(), &mut fast_stage));
    }
    for _ in 0..10 {
        slow_clock.advance(40.0);
        assert!(slow.update(slow_clock.now(), &mut slow_stage));
    }
    assert!((fast.life() - slow.life()).abs() < 1e-4);
    assert!(fast.life() < 1.0);
}

#[test]
fn trail_spawn_fails_quietly_when_pool_is_empty() {
    let (mut stage, _clock) = stage(1);
    let mut rng = StdRng::seed_from_u64(3);
    let first = Trail::spawn(&mut stage, Vec2::ZERO, 0.0, &mut rng);
    let second = Trail::spawn(&mut stage, Vec2::ZERO, 0.0, &mut rng);
    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(stage.pool().in_use(), 1);
}

#[test]
fn burst_fades_out_and_is_removed_within_its_lifetime() {
    let (mut stage, clock) = stage(0);
    let mut rng = StdRng::seed_from_u64(4);
    let mut burst = Burst::spawn(&mut stage, Vec2::new(200.0, 200.0), &mut rng).unwrap();
    let id = only_visual(&stage, VisualKind::Burst);

    let mut last_opacity = f32::MAX;
    let mut elapsed = 0.0;
    while elapsed < 780.0 {
        clock.advance(20.0);
        elapsed += 20.0;
        assert!(burst.update(clock.now(), &mut stage), "burst died before 800ms");
        let frame = stage.surface().frames[&id];
        assert!(frame.opacity < last_opacity);
        last_opacity = frame.opacity;
    }

    clock.advance(1_200.0 - elapsed);
    assert!(!burst.update(clock.now(), &mut stage));
    assert_eq!(stage.surface().existing_of(VisualKind::Burst), 0);
    assert_eq!(stage.surface().disposed_count(id), 1);
    burst.dispose(&mut stage);
    assert_eq!(stage.surface().disposed_count(id), 1);
}

#[test]
fn shockwave_expands_then_disappears_at_600ms() {
    let (mut stage, clock) = stage(0);
    let mut wave = Shockwave::spawn(&mut stage, Vec2::new(10.0, 10.0)).unwrap();
    let id = only_visual(&stage, VisualKind::Shockwave);

    clock.advance(300.0);
    assert!(wave.update(clock.now(), &mut stage));
    let half = stage.surface().frames[&id];
    assert!((half.width - 25.0).abs() < 1e-3);
    assert!((half.opacity - 0.5).abs() < 1e-3);
    assert!((half.border - 0.5).abs() < 1e-3);

    clock.advance(300.0);
    assert!(!wave.update(clock.now(), &mut stage));
    assert_eq!(stage.surface().existing_of(VisualKind::Shockwave), 0);
}

#[test]
fn petal_falls_from_above_to_below_the_viewport() {
    let (mut stage, clock) = stage(0);
    let mut rng = StdRng::seed_from_u64(5);
    let mut petal = Petal::spawn(&mut stage, &mut rng).unwrap();
    let id = only_visual(&stage, VisualKind::Petal);
    assert!(petal.duration_ms() >= 10_000.0 && petal.duration_ms() < 30_000.0);

    let start = stage.surface().frames[&id];
    assert_eq!(start.pos.y, -30.0);
    assert!(start.pos.x >= 0.0 && start.pos.x < 1280.0);

    let step = petal.duration_ms() / 50.0;
    let mut last = start;
    for _ in 0..49 {
        clock.advance(step);
        assert!(petal.update(clock.now(), &mut stage));
        let frame = stage.surface().frames[&id];
        assert!(frame.pos.y > last.pos.y);
        assert!(frame.opacity < last.opacity);
        last = frame;
    }
    assert!(last.pos.y > 700.0);

    clock.advance(step * 2.0);
    assert!(!petal.update(clock.now(), &mut stage));
    assert_eq!(stage.surface().existing_of(VisualKind::Petal), 0);
}

#[test]
fn petal_easing_is_monotonic_with_fixed_endpoints() {
    assert!(ease_petal(0.0).abs() < 1e-4);
    assert!((ease_petal(1.0) - 1.0).abs() < 1e-4);
    assert!(ease_petal(0.5) > 0.5, "curve should ease out");
    let mut prev = ease_petal(0.0);
    for i in 1..=100 {
        let y = ease_petal(i as f32 / 100.0);
        assert!(y >= prev, "not monotonic at {}", i);
        prev = y;
    }
}

#[test]
fn linear_bezier_is_identity() {
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        assert!((cubic_bezier(0.0, 0.0, 1.0, 1.0, t) - t).abs() < 1e-3);
    }
}
