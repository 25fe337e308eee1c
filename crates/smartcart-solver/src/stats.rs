//! Search statistics.

use std::time::{Duration, Instant};

/// Counters for one optimization run.
///
/// # Example
///
/// ```
/// use smartcart_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_generation();
/// stats.record_evaluation();
/// stats.record_evaluation();
/// stats.record_improvement();
///
/// assert_eq!(stats.generations, 1);
/// assert_eq!(stats.evaluations, 2);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finish_time: Option<Instant>,
    /// Generations completed.
    pub generations: u64,
    /// Fitness evaluations performed, including the initial population.
    pub evaluations: u64,
    /// Pairs recombined by crossover.
    pub crossovers: u64,
    /// Offspring changed by mutation.
    pub mutations: u64,
    /// Times the best-ever route improved.
    pub improvements: u64,
}

impl SearchStats {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finish_time = None;
    }

    /// Freezes [`elapsed`](Self::elapsed).
    pub fn finish(&mut self) {
        if self.start_time.is_some() {
            self.finish_time = Some(Instant::now());
        }
    }

    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn record_generation(&mut self) {
        self.generations += 1;
    }

    pub fn record_evaluation(&mut self) {
        self.evaluations += 1;
    }

    pub fn record_crossover(&mut self) {
        self.crossovers += 1;
    }

    pub fn record_mutation(&mut self) {
        self.mutations += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Fitness evaluations per second.
    pub fn evaluations_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.evaluations as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_before_start() {
        let stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.evaluations_per_second(), 0.0);
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = SearchStats::default();
        stats.start();
        stats.finish();
        let first = stats.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.elapsed(), first);
    }

    #[test]
    fn test_counters() {
        let mut stats = SearchStats::default();
        stats.record_crossover();
        stats.record_mutation();
        stats.record_mutation();
        assert_eq!(stats.crossovers, 1);
        assert_eq!(stats.mutations, 2);
        assert_eq!(stats.generations, 0);
    }
}
