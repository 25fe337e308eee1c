//! Genetic operators over index permutations.
//!
//! Operators work on plain `usize` slices and know nothing about items or
//! store sections, so they can be tested and reused on their own:
//! - [`tournament_select`] - biased parent selection
//! - [`ordered_crossover`] - recombination that keeps permutations valid
//! - [`shuffle_indexes`] - swap mutation

mod crossover;
mod mutation;
mod selection;

#[cfg(test)]
mod tests;

pub use crossover::ordered_crossover;
pub use mutation::shuffle_indexes;
pub use selection::tournament_select;
