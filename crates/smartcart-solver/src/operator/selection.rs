//! Tournament selection.

use rand::Rng;

/// Picks `count` candidates by repeated tournaments and returns their indices.
///
/// Each tournament samples `tournament_size` candidates uniformly with
/// replacement and keeps the one with the lowest `key`. Ties go to the
/// earliest sampled aspirant. Returns an empty vector when there are no
/// candidates or the tournament size is zero.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use smartcart_solver::operator::tournament_select;
///
/// let distances = [9.0, 1.0, 5.0, 7.0];
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let chosen = tournament_select(&distances, 10, 3, &mut rng, |d| *d);
/// assert_eq!(chosen.len(), 10);
/// assert!(chosen.iter().all(|&i| i < distances.len()));
/// ```
pub fn tournament_select<T, R, F>(
    candidates: &[T],
    count: usize,
    tournament_size: usize,
    rng: &mut R,
    key: F,
) -> Vec<usize>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    if candidates.is_empty() || tournament_size == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let mut winner = rng.random_range(0..candidates.len());
            for _ in 1..tournament_size {
                let aspirant = rng.random_range(0..candidates.len());
                if key(&candidates[aspirant]) < key(&candidates[winner]) {
                    winner = aspirant;
                }
            }
            winner
        })
        .collect()
}
