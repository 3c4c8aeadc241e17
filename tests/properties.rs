//! Property-based tests for indexing, bit storage and stepping.

use proptest::prelude::*;
use torus_life::bits::BitBuffer;
use torus_life::patterns::scatter;
use torus_life::{Grid, LifeConfig, Stepper, Torus};

// =============================================================================
// Indexing
// =============================================================================

proptest! {
    /// index(x, y) == index(x mod W, y mod H) and always lands on a cell
    #[test]
    fn prop_index_wraps(w in 1usize..300, h in 1usize..300, x: i32, y: i32) {
        let torus = Torus::new(w, h).unwrap();
        let (x, y) = (x as i64, y as i64);
        let idx = torus.index(x, y);
        prop_assert!(idx < w * h);
        prop_assert_eq!(idx, torus.index(x.rem_euclid(w as i64), y.rem_euclid(h as i64)));
        prop_assert_eq!(idx, torus.index(x + w as i64, y - h as i64));
    }

    /// coords() inverts index() for in-range coordinates
    #[test]
    fn prop_coords_roundtrip(w in 1usize..300, h in 1usize..300, x: u16, y: u16) {
        let torus = Torus::new(w, h).unwrap();
        let (x, y) = (x as usize % w, y as usize % h);
        prop_assert_eq!(torus.coords(torus.index(x as i64, y as i64)), (x, y));
    }
}

// =============================================================================
// Bit storage
// =============================================================================

proptest! {
    /// Setting then clearing one cell leaves every other cell as it was
    #[test]
    fn prop_set_clear_isolated(
        len in 1usize..1000,
        seed_bits in proptest::collection::vec(any::<usize>(), 0..50),
        target: usize,
    ) {
        let mut buffer = BitBuffer::new(len);
        for bit in seed_bits {
            buffer.set_alive(bit % len);
        }
        let target = target % len;
        let before = buffer.clone();
        buffer.set_alive(target);
        buffer.set_dead(target);
        for i in (0..len).filter(|&i| i != target) {
            prop_assert_eq!(buffer.get(i), before.get(i));
        }
        prop_assert!(!buffer.get(target));
    }

    /// set_alive and set_dead are idempotent
    #[test]
    fn prop_idempotent(len in 1usize..1000, target: usize, alive: bool) {
        let target = target % len;
        let mut once = BitBuffer::new(len);
        let mut twice = BitBuffer::new(len);
        once.set(target, alive);
        twice.set(target, alive);
        twice.set(target, alive);
        prop_assert_eq!(&once, &twice);
        once.set_alive(target);
        twice.set_alive(target);
        twice.set_alive(target);
        prop_assert_eq!(&once, &twice);
    }
}

// =============================================================================
// Stepping
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Pooled stepping produces the same generations as the plain loop
    #[test]
    fn prop_pooled_matches_sequential(
        w in 1usize..90,
        h in 1usize..90,
        threads in 1usize..6,
        density in 0.0f64..1.0,
        seed: u64,
    ) {
        let mut sequential = Grid::new(&LifeConfig::new(w, h)).unwrap();
        scatter(&mut sequential, density, seed).unwrap();
        let mut pooled = sequential.clone();
        let stepper = Stepper::new(threads).unwrap();
        for _ in 0..4 {
            sequential.step();
            stepper.step(&mut pooled);
            prop_assert_eq!(sequential.active(), pooled.active());
        }
    }
}
