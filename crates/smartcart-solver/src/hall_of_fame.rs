//! Best-ever tracking across generations.

use crate::individual::Individual;

/// Keeps a copy of the single best individual seen so far.
///
/// Only evaluated individuals are considered, and a candidate replaces the
/// current champion only when strictly better.
#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    champion: Option<Individual>,
}

impl HallOfFame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers candidates; returns true if the champion changed.
    pub fn update<'a, I>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Individual>,
    {
        let mut improved = false;
        for candidate in candidates {
            let Some(value) = candidate.fitness().value() else {
                continue;
            };
            let better = match &self.champion {
                None => true,
                Some(champion) => value < champion.fitness().rank(),
            };
            if better {
                self.champion = Some(candidate.clone());
                improved = true;
            }
        }
        improved
    }

    pub fn best(&self) -> Option<&Individual> {
        self.champion.as_ref()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.champion.as_ref().and_then(|c| c.fitness().value())
    }

    pub fn into_best(self) -> Option<Individual> {
        self.champion
    }
}
