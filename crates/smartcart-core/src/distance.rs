//! Route distance evaluation.

use serde::Serialize;

use crate::geometry::Coordinate;
use crate::location::LocationResolver;

/// Total walking distance of a route and the coordinates it passes through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDistance {
    /// Sum of straight-line legs; `f64::INFINITY` when the route is unresolvable.
    pub total: f64,
    /// Entrance, each stop, exit. Empty when the route is unresolvable.
    pub path: Vec<Coordinate>,
}

impl RouteDistance {
    /// The sentinel for a route containing an item that does not resolve.
    pub fn unbounded() -> Self {
        Self {
            total: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Returns false for the unbounded sentinel.
    pub fn is_bounded(&self) -> bool {
        self.total.is_finite()
    }
}

/// Evaluates an ordered route: entrance, each item's section, exit.
///
/// Never fails. If any item does not resolve the result is
/// [`RouteDistance::unbounded`], so callers comparing distances always rank
/// such a route last.
///
/// # Example
///
/// ```
/// use smartcart_core::{evaluate_route, StoreLayout};
///
/// let layout = StoreLayout::walmart_default();
/// let route = evaluate_route(layout, &["milk", "bread", "chicken"]);
/// assert_eq!(route.path.len(), 5);
/// assert!(route.total > 0.0);
///
/// let bad = evaluate_route(layout, &["milk", "unicorn"]);
/// assert!(!bad.is_bounded());
/// assert!(bad.path.is_empty());
/// ```
pub fn evaluate_route<R, I>(resolver: &R, items: &[I]) -> RouteDistance
where
    R: LocationResolver,
    I: AsRef<str>,
{
    let mut path = Vec::with_capacity(items.len() + 2);
    path.push(resolver.entrance());
    for item in items {
        match resolver.resolve(item.as_ref()) {
            Some(location) => path.push(location.coordinate),
            None => return RouteDistance::unbounded(),
        }
    }
    path.push(resolver.exit());

    RouteDistance {
        total: path_length(&path),
        path,
    }
}

/// Sum of distances between consecutive points.
pub fn path_length(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|leg| leg[0].distance_to(leg[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StoreLayout;

    fn naive_sample_distance() -> f64 {
        let legs: [((f64, f64), (f64, f64)); 4] = [
            ((15.0, 15.0), (375.0, 300.0)),
            ((375.0, 300.0), (210.0, 60.0)),
            ((210.0, 60.0), (90.0, 120.0)),
            ((90.0, 120.0), (555.0, 585.0)),
        ];
        legs.iter()
            .map(|&((x1, y1), (x2, y2))| (x2 - x1).hypot(y2 - y1))
            .sum()
    }

    #[test]
    fn test_sample_route_path() {
        let layout = StoreLayout::walmart_default();
        let route = evaluate_route(layout, &["milk", "bread", "chicken"]);

        assert_eq!(
            route.path,
            vec![
                Coordinate::new(15.0, 15.0),
                Coordinate::new(375.0, 300.0),
                Coordinate::new(210.0, 60.0),
                Coordinate::new(90.0, 120.0),
                Coordinate::new(555.0, 585.0),
            ]
        );
        assert!((route.total - naive_sample_distance()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_route_is_entrance_to_exit() {
        let layout = StoreLayout::walmart_default();
        let route = evaluate_route::<_, &str>(layout, &[]);

        assert_eq!(route.path.len(), 2);
        let direct = Coordinate::new(15.0, 15.0).distance_to(Coordinate::new(555.0, 585.0));
        assert_eq!(route.total, direct);
    }

    #[test]
    fn test_unresolved_item_is_unbounded() {
        let layout = StoreLayout::walmart_default();
        let route = evaluate_route(layout, &["milk", "unicorn", "bread"]);

        assert_eq!(route, RouteDistance::unbounded());
        assert!(!route.is_bounded());
    }

    #[test]
    fn test_items_sharing_a_section_add_no_distance() {
        let layout = StoreLayout::walmart_default();
        let one = evaluate_route(layout, &["milk"]);
        let two = evaluate_route(layout, &["milk", "cheese"]);

        assert_eq!(one.total, two.total);
        assert_eq!(two.path.len(), 4);
    }

    #[test]
    fn test_path_length_of_single_point() {
        assert_eq!(path_length(&[Coordinate::new(1.0, 1.0)]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }

    mod props {
        use super::*;
        use crate::location::LocationResolver;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_total_matches_path(
                items in proptest::sample::subsequence(
                    StoreLayout::walmart_default().supported_items().to_vec(),
                    0..10,
                ).prop_shuffle(),
            ) {
                let layout = StoreLayout::walmart_default();
                let route = evaluate_route(layout, &items);
                let direct = layout.entrance().distance_to(layout.exit());

                prop_assert_eq!(route.path.len(), items.len() + 2);
                prop_assert_eq!(route.total, path_length(&route.path));
                prop_assert!(route.total >= direct - 1e-9);
            }
        }
    }
}
