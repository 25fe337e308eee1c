//! Tests for the permutation operators.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::crossover::ox_child;
use super::*;
use crate::error::SearchError;

fn is_permutation(genome: &[usize]) -> bool {
    let mut sorted = genome.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(i, &g)| i == g)
}

fn shuffled(len: usize, rng: &mut ChaCha8Rng) -> Vec<usize> {
    let mut genome: Vec<usize> = (0..len).collect();
    genome.shuffle(rng);
    genome
}

#[test]
fn test_crossover_keeps_a_slice_of_each_parent() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..50 {
        let p1 = shuffled(9, &mut rng);
        let p2 = shuffled(9, &mut rng);
        let (mut c1, mut c2) = (p1.clone(), p2.clone());
        ordered_crossover(&mut c1, &mut c2, &mut rng).unwrap();

        // At least two consecutive positions are inherited unchanged.
        let kept1 = c1.iter().zip(&p1).filter(|(a, b)| a == b).count();
        let kept2 = c2.iter().zip(&p2).filter(|(a, b)| a == b).count();
        assert!(kept1 >= 2, "{p1:?} -> {c1:?}");
        assert!(kept2 >= 2, "{p2:?} -> {c2:?}");
        assert!(is_permutation(&c1));
        assert!(is_permutation(&c2));
    }
}

#[test]
fn test_crossover_of_identical_parents_is_identity() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let parent = shuffled(7, &mut rng);
    let (mut a, mut b) = (parent.clone(), parent.clone());
    ordered_crossover(&mut a, &mut b, &mut rng).unwrap();
    assert_eq!(a, parent);
    assert_eq!(b, parent);
}

#[test]
fn test_crossover_two_genes_keeps_parents() {
    // With two genes every cut keeps the whole parent.
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let (mut a, mut b) = (vec![0, 1], vec![1, 0]);
    ordered_crossover(&mut a, &mut b, &mut rng).unwrap();
    assert_eq!(a, vec![0, 1]);
    assert_eq!(b, vec![1, 0]);
}

#[test]
fn test_ox_child_fills_in_other_parents_order() {
    let first = [0, 1, 2, 3, 4, 5, 6, 7];
    let second = [7, 3, 5, 1, 6, 0, 2, 4];

    // Keeps 2, 3, 4; second read from index 5 gives 0 2 4 7 3 5 1 6,
    // so 0 7 5 1 6 fill positions 5, 6, 7, 0, 1.
    assert_eq!(
        ox_child(&first, &second, 2, 4).unwrap(),
        vec![1, 6, 2, 3, 4, 0, 7, 5]
    );
    // Keeps 5, 1, 6; first read from index 5 gives 5 6 7 0 1 2 3 4,
    // so 7 0 2 3 4 fill positions 5, 6, 7, 0, 1.
    assert_eq!(
        ox_child(&second, &first, 2, 4).unwrap(),
        vec![3, 4, 5, 1, 6, 7, 0, 2]
    );
}

#[test]
fn test_ox_child_wraps_after_slice_end() {
    // Slice at the front: filling starts right after it.
    assert_eq!(
        ox_child(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 0, 1).unwrap(),
        vec![0, 1, 2, 4, 3]
    );
    // Slice at the back: filling wraps to position 0.
    assert_eq!(
        ox_child(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 3, 4).unwrap(),
        vec![2, 1, 0, 3, 4]
    );
}

#[test]
fn test_crossover_short_genomes_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let (mut a, mut b) = (vec![0], vec![0]);
    ordered_crossover(&mut a, &mut b, &mut rng).unwrap();
    assert_eq!(a, vec![0]);

    let (mut a, mut b): (Vec<usize>, Vec<usize>) = (vec![], vec![]);
    ordered_crossover(&mut a, &mut b, &mut rng).unwrap();
    assert!(a.is_empty() && b.is_empty());
}

#[test]
fn test_crossover_length_mismatch() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let (mut a, mut b) = (vec![0, 1, 2], vec![1, 0]);
    assert_eq!(
        ordered_crossover(&mut a, &mut b, &mut rng),
        Err(SearchError::LengthMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(a, vec![0, 1, 2]);
    assert_eq!(b, vec![1, 0]);
}

#[test]
fn test_crossover_rejects_out_of_range_gene() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let (mut a, mut b) = (vec![7, 7, 7], vec![7, 7, 7]);
    assert!(matches!(
        ordered_crossover(&mut a, &mut b, &mut rng),
        Err(SearchError::IndexOutOfRange { index: 7, len: 3 })
    ));
    assert_eq!(a, vec![7, 7, 7]);
}

#[test]
fn test_mutation_probability_zero_is_noop() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut genome = vec![3, 1, 0, 2];
    assert_eq!(shuffle_indexes(&mut genome, 0.0, &mut rng), 0);
    assert_eq!(genome, vec![3, 1, 0, 2]);
}

#[test]
fn test_mutation_single_gene() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut genome = vec![0];
    assert_eq!(shuffle_indexes(&mut genome, 1.0, &mut rng), 0);
    assert_eq!(genome, vec![0]);
}

#[test]
fn test_mutation_two_genes_always_swaps() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut genome = vec![0, 1];
    // Position 0 swaps with 1, then position 1 swaps back with 0.
    assert_eq!(shuffle_indexes(&mut genome, 1.0, &mut rng), 2);
    assert_eq!(genome, vec![0, 1]);
}

#[test]
fn test_tournament_prefers_lower_key() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let distances: Vec<f64> = (0..10).map(|d| d as f64).collect();
    let chosen = tournament_select(&distances, 2_000, 3, &mut rng, |d| *d);

    let best = chosen.iter().filter(|&&i| i == 0).count();
    let worst = chosen.iter().filter(|&&i| i == 9).count();
    // P(best wins) = 1 - 0.9^3 = 0.271; P(worst wins) = 0.001.
    assert!(best > 400, "best chosen {best} times");
    assert!(worst < 20, "worst chosen {worst} times");
}

#[test]
fn test_tournament_size_one_is_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let keys = [0.0, 100.0];
    let chosen = tournament_select(&keys, 1_000, 1, &mut rng, |d| *d);
    let worst = chosen.iter().filter(|&&i| i == 1).count();
    assert!((350..650).contains(&worst));
}

#[test]
fn test_tournament_ranks_infinity_last() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let keys = [f64::INFINITY, 10.0];
    let chosen = tournament_select(&keys, 200, 50, &mut rng, |d| *d);
    assert!(chosen.iter().all(|&i| i == 1));
}

#[test]
fn test_tournament_degenerate_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let empty: [f64; 0] = [];
    assert!(tournament_select(&empty, 5, 3, &mut rng, |d| *d).is_empty());
    assert!(tournament_select(&[1.0], 5, 0, &mut rng, |d| *d).is_empty());
    assert_eq!(tournament_select(&[1.0], 5, 3, &mut rng, |d| *d), vec![0; 5]);
}

proptest! {
    #[test]
    fn prop_crossover_preserves_permutations(len in 0usize..40, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut a = shuffled(len, &mut rng);
        let mut b = shuffled(len, &mut rng);
        ordered_crossover(&mut a, &mut b, &mut rng).unwrap();
        prop_assert!(is_permutation(&a));
        prop_assert!(is_permutation(&b));
    }

    #[test]
    fn prop_mutation_preserves_permutations(
        len in 0usize..40,
        p in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut genome = shuffled(len, &mut rng);
        shuffle_indexes(&mut genome, p, &mut rng);
        prop_assert!(is_permutation(&genome));
    }

    #[test]
    fn prop_tournament_returns_requested_count(
        keys in prop::collection::vec(0.0f64..1_000.0, 1..30),
        count in 0usize..60,
        size in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chosen = tournament_select(&keys, count, size, &mut rng, |d| *d);
        prop_assert_eq!(chosen.len(), count);
        prop_assert!(chosen.iter().all(|&i| i < keys.len()));
    }
}
