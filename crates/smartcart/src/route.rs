//! Turn-by-turn route plans.

use serde::Serialize;
use tracing::debug;

use smartcart_config::{RouteConfig, SmartCartConfig};
use smartcart_core::{Coordinate, LocationResolver, Result, SmartCartError};
use smartcart_solver::{OptimizationResult, RouteOptimizer};

/// One stop on a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    pub item: String,
    pub section: String,
    pub coordinates: Coordinate,
    /// 1-based position in the route.
    pub step: usize,
}

/// A complete answer for a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub optimized_route: Vec<RouteStop>,
    /// Walking distance, rounded to two decimals.
    pub total_distance: f64,
    /// Minutes at the configured walking speed, rounded up.
    pub estimated_time: u64,
    /// Rounded to two decimals.
    pub savings_percentage: f64,
    pub directions: Vec<String>,
    pub full_path: Vec<Coordinate>,
}

impl RoutePlan {
    /// Assembles a plan from an optimizer result.
    ///
    /// The time estimate uses the unrounded distance.
    pub fn from_result<R: LocationResolver>(
        resolver: &R,
        result: &OptimizationResult,
        route_config: &RouteConfig,
    ) -> Result<Self> {
        let optimized_route = result
            .route
            .iter()
            .enumerate()
            .map(|(i, item)| -> Result<RouteStop> {
                let location = resolver.resolve(item).ok_or_else(|| {
                    SmartCartError::OptimizationFailed(format!("{item} has no location"))
                })?;
                Ok(RouteStop {
                    item: item.clone(),
                    section: location.section.to_string(),
                    coordinates: location.coordinate,
                    step: i + 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let directions = directions(&optimized_route);
        Ok(Self {
            estimated_time: estimated_minutes(result.total_distance, route_config.walking_speed),
            total_distance: round2(result.total_distance),
            savings_percentage: round2(result.savings_percentage),
            optimized_route,
            directions,
            full_path: result.full_path.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.optimized_route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.optimized_route.is_empty()
    }
}

/// Optimizes `items` and assembles the plan.
///
/// # Example
///
/// ```
/// use smartcart::prelude::*;
///
/// let config = SmartCartConfig::default().with_random_seed(42);
/// let plan = plan_route(StoreLayout::walmart_default(), &["milk", "bread", "chicken"], &config)
///     .unwrap();
///
/// assert_eq!(plan.optimized_route[0].item, "chicken");
/// assert_eq!(plan.total_distance, 891.53);
/// assert_eq!(plan.estimated_time, 13);
/// assert!(plan.directions[2].ends_with(", then proceed to checkout"));
/// ```
pub fn plan_route<R, I>(resolver: &R, items: &[I], config: &SmartCartConfig) -> Result<RoutePlan>
where
    R: LocationResolver,
    I: AsRef<str>,
{
    config
        .route
        .validate()
        .map_err(|e| SmartCartError::OptimizationFailed(e.to_string()))?;
    let result = RouteOptimizer::new(resolver, &config.optimizer).optimize(items)?;
    let plan = RoutePlan::from_result(resolver, &result, &config.route)?;
    debug!(
        event = "route_planned",
        stops = plan.len(),
        total_distance = plan.total_distance,
        estimated_time = plan.estimated_time,
    );
    Ok(plan)
}

fn directions(stops: &[RouteStop]) -> Vec<String> {
    let mut directions: Vec<String> = stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            if i == 0 {
                format!("Start at entrance, head to {} for {}", stop.section, stop.item)
            } else {
                format!("Continue to {} for {}", stop.section, stop.item)
            }
        })
        .collect();
    if let Some(last) = directions.last_mut() {
        last.push_str(", then proceed to checkout");
    }
    directions
}

fn estimated_minutes(distance: f64, walking_speed: f64) -> u64 {
    (distance / walking_speed / 60.0).ceil() as u64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcart_core::StoreLayout;

    fn stop(item: &str, section: &str, step: usize) -> RouteStop {
        RouteStop {
            item: item.to_string(),
            section: section.to_string(),
            coordinates: Coordinate::default(),
            step,
        }
    }

    #[test]
    fn test_directions() {
        let stops = [
            stop("chicken", "MEAT", 1),
            stop("bread", "BAKERY", 2),
            stop("milk", "DAIRY PRODUCTS 1", 3),
        ];
        assert_eq!(
            directions(&stops),
            [
                "Start at entrance, head to MEAT for chicken",
                "Continue to BAKERY for bread",
                "Continue to DAIRY PRODUCTS 1 for milk, then proceed to checkout",
            ]
        );
    }

    #[test]
    fn test_single_stop_direction() {
        assert_eq!(
            directions(&[stop("milk", "DAIRY PRODUCTS 1", 1)]),
            ["Start at entrance, head to DAIRY PRODUCTS 1 for milk, then proceed to checkout"]
        );
        assert!(directions(&[]).is_empty());
    }

    #[test]
    fn test_estimated_minutes() {
        assert_eq!(estimated_minutes(891.5293, 1.2), 13);
        assert_eq!(estimated_minutes(72.0, 1.2), 1);
        assert_eq!(estimated_minutes(72.01, 1.2), 2);
        assert_eq!(estimated_minutes(0.0, 1.2), 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(891.5293510535043), 891.53);
        assert_eq!(round2(42.18999), 42.19);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_plan_uses_configured_speed() {
        let layout = StoreLayout::walmart_default();
        let mut config = SmartCartConfig::default().with_random_seed(4);
        let slow = {
            config.route.walking_speed = 0.6;
            plan_route(layout, &["milk"], &config).unwrap()
        };
        config.route.walking_speed = 1.2;
        let normal = plan_route(layout, &["milk"], &config).unwrap();

        assert_eq!(slow.total_distance, normal.total_distance);
        assert_eq!(normal.estimated_time, 12);
        assert_eq!(slow.estimated_time, 23);
        assert_eq!(normal.optimized_route[0].step, 1);
        assert_eq!(normal.optimized_route[0].section, "DAIRY PRODUCTS 1");
    }

    #[test]
    fn test_rejects_bad_walking_speed() {
        let layout = StoreLayout::walmart_default();
        for speed in [0.0, -1.2, f64::NAN] {
            let mut config = SmartCartConfig::default().with_random_seed(1);
            config.route.walking_speed = speed;
            let err = plan_route(layout, &["milk", "bread"], &config).unwrap_err();
            assert!(matches!(err, SmartCartError::OptimizationFailed(_)), "{speed}");
            assert!(err.to_string().contains("walking_speed"));
        }
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let layout = StoreLayout::walmart_default();
        let config = SmartCartConfig::default();
        let err = plan_route(layout, &["unicorn"], &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Items not found or not mapped to shelves: unicorn"
        );
    }

    #[test]
    fn test_plan_json_shape() {
        let config = SmartCartConfig::default().with_random_seed(8);
        let plan = plan_route(StoreLayout::walmart_default(), &["bread", "milk"], &config).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        let first = &json["optimized_route"][0];
        assert_eq!(first["step"], 1);
        assert!(first["coordinates"].is_array());
        assert_eq!(json["full_path"][0], serde_json::json!([15.0, 15.0]));
        assert_eq!(json["directions"].as_array().unwrap().len(), 2);
        assert!(json["estimated_time"].is_u64());
    }
}
