//! Permutation-encoded candidates.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SearchError;

/// Cached fitness of an [`Individual`].
///
/// Variation operators reset it to `Unevaluated`; only evaluation sets
/// `Valid`, so a valid value always matches the current genome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fitness {
    #[default]
    Unevaluated,
    /// Total route distance; lower is better.
    Valid(f64),
}

impl Fitness {
    pub fn is_valid(&self) -> bool {
        matches!(self, Fitness::Valid(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Fitness::Valid(v) => Some(*v),
            Fitness::Unevaluated => None,
        }
    }

    /// Value used for ranking. Unevaluated candidates rank last.
    pub fn rank(&self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }
}

/// One candidate route, encoded as a permutation of indices into the item list.
///
/// # Example
///
/// ```
/// use smartcart_solver::individual::{Fitness, Individual};
///
/// let mut ind = Individual::identity(4);
/// ind.set_fitness(12.5);
/// assert_eq!(ind.fitness(), Fitness::Valid(12.5));
///
/// ind.genome_mut().swap(0, 3);
/// assert_eq!(ind.genome(), &[3, 1, 2, 0]);
/// assert_eq!(ind.fitness(), Fitness::Unevaluated);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Vec<usize>,
    fitness: Fitness,
}

impl Individual {
    pub fn new(genome: Vec<usize>) -> Self {
        Self {
            genome,
            fitness: Fitness::Unevaluated,
        }
    }

    /// The input order `[0, 1, .., n)`.
    pub fn identity(len: usize) -> Self {
        Self::new((0..len).collect())
    }

    /// A uniformly random permutation of `[0, len)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut genome: Vec<usize> = (0..len).collect();
        genome.shuffle(rng);
        Self::new(genome)
    }

    pub fn genome(&self) -> &[usize] {
        &self.genome
    }

    /// Mutable access to the genome. Invalidates the cached fitness.
    pub fn genome_mut(&mut self) -> &mut [usize] {
        self.fitness = Fitness::Unevaluated;
        &mut self.genome
    }

    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn set_fitness(&mut self, value: f64) {
        self.fitness = Fitness::Valid(value);
    }

    pub fn invalidate(&mut self) {
        self.fitness = Fitness::Unevaluated;
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// Checks that the genome is a bijection over `[0, expected_len)`.
    pub fn check_permutation(&self, expected_len: usize) -> Result<(), SearchError> {
        if self.genome.len() != expected_len {
            return Err(SearchError::LengthMismatch {
                expected: expected_len,
                actual: self.genome.len(),
            });
        }
        let mut seen = vec![false; expected_len];
        for &index in &self.genome {
            let slot = seen.get_mut(index).ok_or(SearchError::IndexOutOfRange {
                index,
                len: expected_len,
            })?;
            if *slot {
                return Err(SearchError::DuplicateIndex(index));
            }
            *slot = true;
        }
        Ok(())
    }

    /// Maps the genome back onto the item list.
    pub fn decode<'i, I: AsRef<str>>(&self, items: &'i [I]) -> Result<Vec<&'i str>, SearchError> {
        self.check_permutation(items.len())?;
        Ok(self.genome.iter().map(|&i| items[i].as_ref()).collect())
    }
}
