//! Tests for stream splitting and merging
//!
//! Forked children must behave like unrelated generators, and join must be
//! a symmetric deterministic fold of two stream states.

use proptest::prelude::*;
use splitrand_core_rs::SplitRng;

const GOLDEN: i64 = -7046029254386353131;

#[test]
fn test_fork_gives_child_fresh_gamma() {
    let (continuation, child) = SplitRng::new(42).fork();
    assert_eq!(continuation.gamma(), GOLDEN);
    assert_eq!(child.gamma(), 0x77FB59B63A77005);
}

#[test]
fn test_fork_streams_do_not_overlap() {
    let (mut continuation, mut child) = SplitRng::new(42).fork();

    let mut cont_values = Vec::new();
    let mut child_values = Vec::new();
    for _ in 0..100 {
        let (v, next) = continuation.next_i64();
        cont_values.push(v);
        continuation = next;

        let (v, next) = child.next_i64();
        child_values.push(v);
        child = next;
    }

    assert_ne!(
        cont_values, child_values,
        "forked streams should not shadow each other"
    );
    let overlap = cont_values
        .iter()
        .filter(|v| child_values.contains(v))
        .count();
    assert_eq!(overlap, 0, "forked streams shared {} values", overlap);
}

#[test]
fn test_sibling_children_differ() {
    let root = SplitRng::new(42);
    let (continuation, first_child) = root.fork();
    let (_, second_child) = continuation.fork();

    assert_ne!(first_child, second_child);
    assert_ne!(first_child.next_i64().0, second_child.next_i64().0);
}

#[test]
fn test_join_pinned_values() {
    let joined = SplitRng::new(1).join(SplitRng::new(2));
    assert_eq!(joined.seed(), -8268557744905121425);
    assert_eq!(joined.gamma(), -6148914691236517205);

    // Advancing the inputs moves the joined seed, but two golden-gamma
    // inputs always fold to the same joined gamma.
    let (_, a) = SplitRng::new(1).next_i64();
    let (_, b) = SplitRng::new(2).next_i64();
    let joined = a.join(b);
    assert_eq!(joined.seed(), 455453117854845455);
    assert_eq!(joined.gamma(), -6148914691236517205);
}

#[test]
fn test_join_produces_usable_stream() {
    let joined = SplitRng::new(12345).join(SplitRng::new(54321));
    assert_eq!(joined.seed(), 6205993629104205024);
    assert_eq!(joined.gamma(), -6148914691236517205);
    assert_eq!(joined.next_i64().0, 2531729627466090580);
}

#[test]
fn test_join_byte_seeded_streams() {
    let a = SplitRng::seed_from_bytes(b"left stream");
    let b = SplitRng::seed_from_bytes(b"right stream");
    let joined = a.join(b);
    assert_eq!(joined.seed(), 3950360218563482474);
    assert_eq!(joined.gamma(), 3891031927935778269);
}

proptest! {
    /// Property: join is symmetric in its arguments.
    #[test]
    fn prop_join_commutative(seed_a in any::<i64>(), seed_b in any::<i64>()) {
        let a = SplitRng::new(seed_a);
        let b = SplitRng::new(seed_b);
        prop_assert_eq!(a.join(b), b.join(a));
    }

    /// Property: joining a stream with itself folds the seed to zero.
    #[test]
    fn prop_self_join_collapses_seed(seed in any::<i64>()) {
        let rng = SplitRng::new(seed);
        let joined = rng.join(rng);
        prop_assert_eq!(joined.seed(), 0);
        prop_assert_eq!(joined.gamma(), -6148914691236517205);
    }

    /// Property: the continuation stays on the parent stream (same gamma,
    /// counter advanced by exactly two strides).
    #[test]
    fn prop_fork_continuation_stays_on_stream(seed in any::<i64>()) {
        let (continuation, _) = SplitRng::new(seed).fork();
        prop_assert_eq!(continuation.gamma(), GOLDEN);
        prop_assert_eq!(
            continuation.seed(),
            seed.wrapping_add(GOLDEN).wrapping_add(GOLDEN)
        );
    }

    /// Property: every forked child carries a stream-quality gamma.
    #[test]
    fn prop_fork_child_gamma_quality(seed in any::<i64>()) {
        let (_, child) = SplitRng::new(seed).fork();
        let g = child.gamma() as u64;
        prop_assert_eq!(g & 1, 1, "child gamma must be odd");
        prop_assert!(
            (g ^ (g >> 1)).count_ones() >= 24,
            "child gamma {:#018X} has too few bit transitions",
            g
        );
    }

    /// Property: gamma quality holds arbitrarily deep into the fork tree,
    /// not just one level below a golden-gamma root.
    #[test]
    fn prop_gamma_quality_under_iterated_forking(seed in any::<i64>()) {
        let mut rng = SplitRng::new(seed);
        for depth in 0..64 {
            let (_, child) = rng.fork();
            let g = child.gamma() as u64;
            prop_assert_eq!(g & 1, 1, "even gamma at depth {}", depth);
            prop_assert!(
                (g ^ (g >> 1)).count_ones() >= 24,
                "weak gamma {:#018X} at depth {}",
                g,
                depth
            );
            rng = child;
        }
    }

    /// Property: joined gammas are stream-quality too.
    #[test]
    fn prop_join_gamma_quality(seed_a in any::<i64>(), seed_b in any::<i64>()) {
        let joined = SplitRng::new(seed_a).join(SplitRng::new(seed_b));
        let g = joined.gamma() as u64;
        prop_assert_eq!(g & 1, 1);
        prop_assert!((g ^ (g >> 1)).count_ones() >= 24);
    }
}
