//! Per-run search state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::hall_of_fame::HallOfFame;
use crate::individual::Individual;
use crate::stats::SearchStats;

/// State owned by a single optimization run.
///
/// Each run gets its own random stream, so concurrent runs never share
/// generator state.
#[derive(Debug)]
pub struct SearchScope {
    rng: ChaCha8Rng,
    stats: SearchStats,
    hall_of_fame: HallOfFame,
    generation: u64,
}

impl SearchScope {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uses `seed` when given, otherwise OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
            hall_of_fame: HallOfFame::new(),
            generation: 0,
        }
    }

    pub fn start_search(&mut self) {
        self.stats.start();
        self.generation = 0;
    }

    pub fn finish_search(&mut self) {
        self.stats.finish();
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn increment_generation(&mut self) {
        self.generation += 1;
        self.stats.record_generation();
    }

    /// Offers candidates to the hall of fame, recording an improvement.
    pub fn update_best<'a, I>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Individual>,
    {
        let improved = self.hall_of_fame.update(candidates);
        if improved {
            self.stats.record_improvement();
        }
        improved
    }

    pub fn best(&self) -> Option<&Individual> {
        self.hall_of_fame.best()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.hall_of_fame.best_fitness()
    }

    /// Consumes the scope, returning the champion and final statistics.
    pub fn into_parts(self) -> (Option<Individual>, SearchStats) {
        (self.hall_of_fame.into_best(), self.stats)
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SearchScope::with_seed(99);
        let mut b = SearchScope::from_seed(Some(99));
        let xs: Vec<u32> = (0..8).map(|_| a.rng().random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_generation_counting() {
        let mut scope = SearchScope::with_seed(0);
        scope.start_search();
        scope.increment_generation();
        scope.increment_generation();
        assert_eq!(scope.generation(), 2);
        assert_eq!(scope.stats().generations, 2);
    }

    #[test]
    fn test_update_best_records_improvement() {
        let mut scope = SearchScope::with_seed(0);
        let mut ind = Individual::identity(2);
        ind.set_fitness(4.0);
        assert!(scope.update_best([&ind]));
        assert!(!scope.update_best([&ind]));
        assert_eq!(scope.stats().improvements, 1);

        let (best, stats) = scope.into_parts();
        assert_eq!(best.unwrap().genome(), &[0, 1]);
        assert_eq!(stats.improvements, 1);
    }
}
