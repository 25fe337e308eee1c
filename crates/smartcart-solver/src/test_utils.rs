//! Fixtures shared by the solver's unit tests.

use smartcart_core::{Coordinate, Location, LocationResolver};

use crate::fitness::RouteFitness;

/// Items `s0..s{n-1}` on a straight line between entrance and exit.
///
/// Item `si` sits at `(i + 1, 0)`, the entrance at the origin and the exit
/// at `(n + 1, 0)`, so the identity order is the unique shortest route with
/// length `n + 1`.
pub struct LineResolver {
    stops: Vec<(String, Coordinate)>,
}

impl LineResolver {
    pub fn new(len: usize) -> Self {
        Self {
            stops: (0..len)
                .map(|i| (format!("s{i}"), Coordinate::new((i + 1) as f64, 0.0)))
                .collect(),
        }
    }

    pub fn items(&self) -> Vec<String> {
        self.stops.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn optimal_distance(&self) -> f64 {
        (self.stops.len() + 1) as f64
    }
}

impl LocationResolver for LineResolver {
    fn resolve(&self, item: &str) -> Option<Location<'_>> {
        self.stops
            .iter()
            .find(|(name, _)| name == item)
            .map(|(name, coordinate)| Location {
                section: name.as_str(),
                coordinate: *coordinate,
            })
    }

    fn entrance(&self) -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    fn exit(&self) -> Coordinate {
        Coordinate::new((self.stops.len() + 1) as f64, 0.0)
    }
}

/// Route fitness over a [`LineResolver`] of `len` items.
pub fn line_fitness(len: usize) -> RouteFitness {
    let resolver = LineResolver::new(len);
    RouteFitness::new(&resolver, &resolver.items())
}
