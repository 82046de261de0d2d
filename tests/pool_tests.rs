// Host-side tests for the fixed-size visual pool.

use crystal_cursor::core::{ParticlePool, VisualId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pool_of(n: u32) -> ParticlePool {
    ParticlePool::new((0..n).map(VisualId))
}

#[test]
fn acquire_hands_out_each_element_once_then_none() {
    let mut pool = pool_of(3);
    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    let c = pool.acquire().unwrap();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_eq!(pool.in_use(), 3);
    assert!(pool.acquire().is_none());
    assert_eq!(pool.capacity(), 3, "pool must not grow on exhaustion");
}

#[test]
fn release_frees_exactly_once() {
    let mut pool = pool_of(2);
    let a = pool.acquire().unwrap();
    assert!(pool.is_in_use(a));
    assert!(pool.release(a));
    assert!(!pool.release(a), "second release must be a no-op");
    assert_eq!(pool.in_use(), 0);
    // a freed element is handed out again
    assert_eq!(pool.acquire(), Some(a));
}

#[test]
fn release_of_unknown_id_is_ignored() {
    let mut pool = pool_of(2);
    assert!(!pool.release(VisualId(99)));
    assert_eq!(pool.in_use(), 0);
}

#[test]
fn clear_all_force_releases_in_use_elements() {
    let mut pool = pool_of(5);
    let held: Vec<_> = (0..3).map(|_| pool.acquire().unwrap()).collect();
    let mut released = pool.clear_all();
    released.sort();
    assert_eq!(released, held);
    assert_eq!(pool.in_use(), 0);
    assert!(pool.clear_all().is_empty());
    assert_eq!(pool.capacity(), 5);
}

#[test]
fn in_use_never_exceeds_capacity_under_random_traffic() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pool = pool_of(8);
    let mut held: Vec<VisualId> = Vec::new();
    for _ in 0..5_000 {
        match rng.gen_range(0..10) {
            0..=5 => {
                if let Some(id) = pool.acquire() {
                    assert!(!held.contains(&id), "element handed out twice");
                    held.push(id);
                }
            }
            6..=8 => {
                if !held.is_empty() {
                    let id = held.swap_remove(rng.gen_range(0..held.len()));
                    assert!(pool.release(id));
                }
            }
            _ => {
                pool.clear_all();
                held.clear();
            }
        }
        assert!(pool.in_use() <= pool.capacity());
        assert_eq!(pool.in_use(), held.len());
    }
}

#[test]
fn sixty_requests_against_fifty_elements() {
    let mut pool = pool_of(50);
    let granted = (0..60).filter(|_| pool.acquire().is_some()).count();
    assert_eq!(granted, 50);
    assert_eq!(pool.in_use(), 50);
}

#[test]
fn with_capacity_skips_failed_creations() {
    let mut next = 0u32;
    let pool = ParticlePool::with_capacity(10, || {
        next += 1;
        (next % 2 == 0).then_some(VisualId(next))
    });
    assert_eq!(pool.capacity(), 5);
}

#[test]
fn drain_empties_the_pool() {
    let mut pool = pool_of(4);
    pool.acquire();
    let all = pool.drain();
    assert_eq!(all.len(), 4);
    assert_eq!(pool.capacity(), 0);
    assert_eq!(pool.in_use(), 0);
    assert!(pool.acquire().is_none());
}

#[test]
fn next_free_id_skips_ids_still_held() {
    let held = [VisualId(u32::MAX), VisualId(0), VisualId(1)];
    let mut counter = u32::MAX;
    let id = VisualId::next_free(&mut counter, |id| held.contains(&id));
    assert_eq!(id, VisualId(2));
    assert_eq!(counter, 3);

    let mut counter = 7;
    assert_eq!(VisualId::next_free(&mut counter, |_| false), VisualId(7));
    assert_eq!(counter, 8);
}
