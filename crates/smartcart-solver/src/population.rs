//! Population of candidate routes.

use rand::Rng;

use crate::error::SearchError;
use crate::fitness::FitnessFunction;
use crate::individual::Individual;
use crate::stats::SearchStats;

/// A fixed-size set of individuals evolved together.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// `size` random permutations of `[0, genome_len)`.
    pub fn random<R: Rng + ?Sized>(size: usize, genome_len: usize, rng: &mut R) -> Self {
        Self::new(
            (0..size)
                .map(|_| Individual::random(genome_len, rng))
                .collect(),
        )
    }

    /// Evaluates every individual without a valid fitness.
    ///
    /// Returns the number of evaluations performed.
    pub fn evaluate<F: FitnessFunction + ?Sized>(
        &mut self,
        fitness: &F,
        stats: &mut SearchStats,
    ) -> Result<usize, SearchError> {
        let mut evaluated = 0;
        for individual in self
            .individuals
            .iter_mut()
            .filter(|ind| !ind.fitness().is_valid())
        {
            let value = fitness.evaluate(individual.genome())?;
            individual.set_fitness(value);
            stats.record_evaluation();
            evaluated += 1;
        }
        Ok(evaluated)
    }

    /// Generational replacement.
    pub fn replace(&mut self, offspring: Vec<Individual>) {
        self.individuals = offspring;
    }

    /// The evaluated individual with the lowest fitness.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|ind| ind.fitness().is_valid())
            .min_by(|a, b| a.fitness().rank().total_cmp(&b.fitness().rank()))
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
