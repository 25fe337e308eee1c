//! Shuffle-index mutation.

use rand::Rng;

/// Swaps each position, with probability `index_probability`, with another
/// uniformly chosen position. Returns the number of swaps performed.
///
/// Only positions move, so a permutation stays a permutation.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use smartcart_solver::operator::shuffle_indexes;
///
/// let mut genome = vec![0, 1, 2, 3, 4];
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let swaps = shuffle_indexes(&mut genome, 1.0, &mut rng);
/// assert_eq!(swaps, 5);
///
/// let mut sorted = genome.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn shuffle_indexes<R: Rng + ?Sized>(
    genome: &mut [usize],
    index_probability: f64,
    rng: &mut R,
) -> usize {
    let size = genome.len();
    if size < 2 {
        return 0;
    }

    let mut swaps = 0;
    for i in 0..size {
        if rng.random::<f64>() < index_probability {
            let mut j = rng.random_range(0..size - 1);
            if j >= i {
                j += 1;
            }
            genome.swap(i, j);
            swaps += 1;
        }
    }
    swaps
}
