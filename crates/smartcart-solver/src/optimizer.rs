//! Genetic route optimizer.
//!
//! Searches permutations of a shopping list for the shortest walk from the
//! entrance through every item's section to the exit.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

use smartcart_config::OptimizerConfig;
use smartcart_core::{evaluate_route, Coordinate, LocationResolver, Result, SmartCartError};

use crate::error::SearchError;
use crate::fitness::RouteFitness;
use crate::individual::Individual;
use crate::operator::{ordered_crossover, shuffle_indexes, tournament_select};
use crate::population::Population;
use crate::savings::savings_percentage;
use crate::scope::SearchScope;
use crate::stats::SearchStats;


/// Outcome of a successful optimization.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Items in visiting order; a permutation of the input.
    pub route: Vec<String>,
    /// Walking distance of `route`, entrance to exit.
    pub total_distance: f64,
    /// Improvement over the input order, in `[0, 100]`.
    pub savings_percentage: f64,
    /// Entrance, each stop, exit.
    pub full_path: Vec<Coordinate>,
    /// Walking distance of the input order.
    pub naive_distance: f64,
    #[serde(skip)]
    pub stats: SearchStats,
}

/// Runs the genetic search against a resolver.
///
/// The optimizer holds no mutable state; every call to
/// [`optimize`](Self::optimize) builds its own population and random
/// stream, so one instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use smartcart_config::OptimizerConfig;
/// use smartcart_core::StoreLayout;
/// use smartcart_solver::RouteOptimizer;
///
/// let config = OptimizerConfig::default().with_random_seed(42);
/// let optimizer = RouteOptimizer::new(StoreLayout::walmart_default(), &config);
///
/// let result = optimizer.optimize(&["milk", "bread", "chicken"]).unwrap();
/// assert_eq!(result.route, ["chicken", "bread", "milk"]);
/// assert!(result.total_distance <= result.naive_distance);
/// ```
#[derive(Debug)]
pub struct RouteOptimizer<'a, R> {
    resolver: &'a R,
    config: &'a OptimizerConfig,
}

impl<'a, R: LocationResolver> RouteOptimizer<'a, R> {
    pub fn new(resolver: &'a R, config: &'a OptimizerConfig) -> Self {
        Self { resolver, config }
    }

    /// Finds a short visiting order for `items`.
    ///
    /// # Errors
    ///
    /// - [`SmartCartError::EmptyShoppingList`] for an empty list
    /// - [`SmartCartError::UnknownItems`] naming every item that does not resolve
    /// - [`SmartCartError::OptimizationFailed`] for an invalid configuration or
    ///   a broken search invariant
    pub fn optimize<I: AsRef<str>>(&self, items: &[I]) -> Result<OptimizationResult> {
        if items.is_empty() {
            return Err(SmartCartError::EmptyShoppingList);
        }
        let unknown = self.resolver.unresolved(items);
        if !unknown.is_empty() {
            return Err(SmartCartError::UnknownItems(
                unknown.into_iter().map(str::to_owned).collect(),
            ));
        }
        self.config
            .validate()
            .map_err(|e| SmartCartError::OptimizationFailed(e.to_string()))?;

        info!(
            event = "optimize_start",
            items = items.len(),
            population = self.config.population_size(items.len()),
            generations = self.config.generation_count(items.len()),
            seed = ?self.config.random_seed,
        );

        let mut scope = SearchScope::from_seed(self.config.random_seed);
        scope.start_search();
        if items.len() > 1 {
            self.search(items, &mut scope)?;
        }
        scope.finish_search();

        let (champion, stats) = scope.into_parts();
        let best = match champion {
            Some(best) => best,
            None if items.len() == 1 => Individual::identity(1),
            None => {
                return Err(SmartCartError::OptimizationFailed(
                    "search produced no evaluated route".to_string(),
                ))
            }
        };

        let route = best.decode(items)?;
        let optimized = evaluate_route(self.resolver, &route);
        if !optimized.is_bounded() {
            return Err(SearchError::UnboundedFitness.into());
        }
        let naive_distance = evaluate_route(self.resolver, items).total;
        let savings = savings_percentage(optimized.total, naive_distance);

        info!(
            event = "optimize_end",
            items = items.len(),
            distance = optimized.total,
            naive_distance,
            savings,
            generations = stats.generations,
            evaluations = stats.evaluations,
            elapsed_ms = stats.elapsed().as_millis() as u64,
        );

        Ok(OptimizationResult {
            route: route.into_iter().map(str::to_owned).collect(),
            total_distance: optimized.total,
            savings_percentage: savings,
            full_path: optimized.path,
            naive_distance,
            stats,
        })
    }

    fn search<I: AsRef<str>>(
        &self,
        items: &[I],
        scope: &mut SearchScope,
    ) -> std::result::Result<(), SearchError> {
        let item_count = items.len();
        let fitness = RouteFitness::new(self.resolver, items);
        let population_size = self.config.population_size(item_count);
        let generations = self.config.generation_count(item_count);

        let mut population = Population::random(population_size, item_count, scope.rng());
        population.evaluate(&fitness, scope.stats_mut())?;
        scope.update_best(population.individuals());

        for _ in 0..generations {
            let offspring = self.breed(&population, scope)?;
            population.replace(offspring);
            let evaluated = population.evaluate(&fitness, scope.stats_mut())?;
            scope.increment_generation();

            if scope.update_best(population.individuals()) {
                debug!(
                    event = "improvement",
                    generation = scope.generation(),
                    distance = scope.best_fitness(),
                );
            }
            trace!(
                event = "generation",
                generation = scope.generation(),
                evaluated,
                generation_best = population.best().map(|ind| ind.fitness().rank()),
                best = scope.best_fitness(),
            );
        }
        Ok(())
    }

    /// Selection, crossover and mutation. Returns unevaluated offspring
    /// where variation changed a genome.
    fn breed(
        &self,
        population: &Population,
        scope: &mut SearchScope,
    ) -> std::result::Result<Vec<Individual>, SearchError> {
        let parents = population.individuals();
        let selected = tournament_select(
            parents,
            parents.len(),
            self.config.tournament_size,
            scope.rng(),
            |ind: &Individual| ind.fitness().rank(),
        );
        let mut offspring: Vec<Individual> =
            selected.into_iter().map(|i| parents[i].clone()).collect();

        for pair in offspring.chunks_exact_mut(2) {
            if scope.rng().random::<f64>() < self.config.crossover_probability {
                let (first, second) = pair.split_at_mut(1);
                ordered_crossover(first[0].genome_mut(), second[0].genome_mut(), scope.rng())?;
                scope.stats_mut().record_crossover();
            }
        }

        for child in &mut offspring {
            if scope.rng().random::<f64>() < self.config.mutation_probability {
                shuffle_indexes(
                    child.genome_mut(),
                    self.config.mutation_index_probability,
                    scope.rng(),
                );
                scope.stats_mut().record_mutation();
            }
        }
        Ok(offspring)
    }
}

/// Shorthand for [`RouteOptimizer::optimize`].
pub fn optimize<R, I>(
    resolver: &R,
    items: &[I],
    config: &OptimizerConfig,
) -> Result<OptimizationResult>
where
    R: LocationResolver,
    I: AsRef<str>,
{
    RouteOptimizer::new(resolver, config).optimize(items)
}
