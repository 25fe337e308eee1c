//! SmartCart Solver - genetic search for short shopping routes
//!
//! This crate provides:
//! - Permutation-encoded individuals with an explicit fitness state
//! - Tournament selection, ordered crossover and swap mutation
//! - A per-run search scope with its own random stream and statistics
//! - [`RouteOptimizer`], which ties these together over a
//!   [`LocationResolver`](smartcart_core::LocationResolver)

pub mod error;
pub mod fitness;
pub mod hall_of_fame;
pub mod individual;
pub mod operator;
pub mod optimizer;
pub mod population;
pub mod savings;
pub mod scope;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::SearchError;
pub use fitness::{FitnessFunction, RouteFitness};
pub use hall_of_fame::HallOfFame;
pub use individual::{Fitness, Individual};
pub use optimizer::{optimize, OptimizationResult, RouteOptimizer};
pub use population::Population;
pub use savings::savings_percentage;
pub use scope::SearchScope;
pub use stats::SearchStats;
