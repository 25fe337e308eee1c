//! Fitness evaluation for index permutations.

use smartcart_core::{Coordinate, LocationResolver};

use crate::error::SearchError;

/// Scores a genome. Lower is better.
pub trait FitnessFunction {
    /// Length every genome must have.
    fn genome_len(&self) -> usize;

    /// Evaluates a genome.
    ///
    /// # Errors
    ///
    /// Fails when the genome does not index the problem correctly. An
    /// infeasible but well-formed genome is not an error; it scores
    /// `f64::INFINITY`.
    fn evaluate(&self, genome: &[usize]) -> Result<f64, SearchError>;
}

/// Route distance of a permutation over a fixed item list.
///
/// Item coordinates are resolved once up front, so each evaluation is a
/// single pass over the genome with no allocation and no lookups.
///
/// # Example
///
/// ```
/// use smartcart_core::{evaluate_route, StoreLayout};
/// use smartcart_solver::fitness::{FitnessFunction, RouteFitness};
///
/// let layout = StoreLayout::walmart_default();
/// let items = ["milk", "bread", "chicken"];
/// let fitness = RouteFitness::new(layout, &items);
///
/// let by_index = fitness.evaluate(&[2, 1, 0]).unwrap();
/// let by_name = evaluate_route(layout, &["chicken", "bread", "milk"]).total;
/// assert!((by_index - by_name).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct RouteFitness {
    entrance: Coordinate,
    exit: Coordinate,
    stops: Vec<Option<Coordinate>>,
}

impl RouteFitness {
    pub fn new<R, I>(resolver: &R, items: &[I]) -> Self
    where
        R: LocationResolver,
        I: AsRef<str>,
    {
        Self {
            entrance: resolver.entrance(),
            exit: resolver.exit(),
            stops: items
                .iter()
                .map(|item| resolver.resolve(item.as_ref()).map(|l| l.coordinate))
                .collect(),
        }
    }
}

impl FitnessFunction for RouteFitness {
    fn genome_len(&self) -> usize {
        self.stops.len()
    }

    fn evaluate(&self, genome: &[usize]) -> Result<f64, SearchError> {
        let len = self.stops.len();
        if genome.len() != len {
            return Err(SearchError::LengthMismatch {
                expected: len,
                actual: genome.len(),
            });
        }

        let mut total = 0.0;
        let mut current = self.entrance;
        for &index in genome {
            let stop = self
                .stops
                .get(index)
                .ok_or(SearchError::IndexOutOfRange { index, len })?;
            let Some(next) = *stop else {
                return Ok(f64::INFINITY);
            };
            total += current.distance_to(next);
            current = next;
        }
        Ok(total + current.distance_to(self.exit))
    }
}
