// Host-side tests for the falling petal field.

mod common;

use common::*;
use crystal_cursor::core::{PetalConfig, PetalField, VisualKind};

fn field() -> (PetalField<FakeSurface>, Clock) {
    let (surface, clock) = FakeSurface::new();
    let config = PetalConfig {
        seed: Some(11),
        ..PetalConfig::default()
    };
    (PetalField::new(surface, config), clock)
}

#[test]
fn nothing_appears_before_start() {
    let (mut field, _clock) = field();
    field.tick();
    assert_eq!(field.live(), 0);
    assert_eq!(field.stage().surface().tick_requests, 0);
}

#[test]
fn petals_appear_one_per_stagger_interval() {
    let (mut field, clock) = field();
    field.start();
    assert_eq!(field.queued(), 30);

    field.tick();
    assert_eq!(field.live(), 1);

    clock.advance(299.0);
    field.tick();
    assert_eq!(field.live(), 1);

    clock.advance(1.0);
    field.tick();
    assert_eq!(field.live(), 2);

    for _ in 0..28 {
        clock.advance(300.0);
        field.tick();
    }
    assert_eq!(field.live(), 30);
    assert_eq!(field.queued(), 0);
    assert_eq!(field.stage().surface().existing_of(VisualKind::Petal), 30);
}

#[test]
fn late_frame_catches_up_on_missed_spawns() {
    let (mut field, clock) = field();
    field.start();
    clock.advance(900.0);
    field.tick();
    assert_eq!(field.live(), 4);
}

#[test]
fn population_stays_constant_over_a_long_run() {
    let (mut field, clock) = field();
    field.start();
    // let the whole initial wave in
    for _ in 0..30 {
        field.tick();
        clock.advance(300.0);
    }
    let mut replaced = 0;
    // two minutes covers several full falls of every petal
    for _ in 0..(120_000 / 50) {
        clock.advance(50.0);
        let report = field.tick();
        replaced += report.retired;
        assert_eq!(field.live(), 30);
        assert_eq!(field.stage().surface().existing_of(VisualKind::Petal), 30);
    }
    assert!(replaced > 30, "only {} petals were replaced", replaced);
}

#[test]
fn teardown_removes_every_petal_and_stops() {
    let (mut field, clock) = field();
    field.start();
    for _ in 0..10 {
        field.tick();
        clock.advance(300.0);
    }
    assert!(field.live() > 0);

    field.teardown();
    assert_eq!(field.live(), 0);
    assert!(field.stage().surface().kinds.is_empty());

    let requests = field.stage().surface().tick_requests;
    clock.advance(60_000.0);
    field.tick();
    field.start();
    assert_eq!(field.live(), 0);
    assert_eq!(field.stage().surface().tick_requests, requests);
}
