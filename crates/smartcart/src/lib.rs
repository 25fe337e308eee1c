//! SmartCart - shortest shopping routes through a store layout
//!
//! Give it a shopping list; get back the order to collect the items in,
//! turn-by-turn directions and a walking-time estimate.
//!
//! # Example
//!
//! ```
//! use smartcart::prelude::*;
//!
//! let config = SmartCartConfig::default().with_random_seed(1);
//! let layout = StoreLayout::walmart_default();
//! let plan = plan_route(layout, &["eggs", "frozen", "deli"], &config).unwrap();
//!
//! assert_eq!(plan.optimized_route.len(), 3);
//! assert!(plan.directions[0].starts_with("Start at entrance"));
//! ```

mod route;

pub use route::{plan_route, RoutePlan, RouteStop};

pub use smartcart_config::{
    ConfigError, OptimizerConfig, RouteConfig, ScalingConfig, ServerConfig, SmartCartConfig,
};
pub use smartcart_core::{
    evaluate_route, Coordinate, Location, LocationResolver, Result, RouteDistance, Section,
    SmartCartError, StoreLayout, DEFAULT_LAYOUT_NAME,
};
pub use smartcart_solver::{optimize, OptimizationResult, RouteOptimizer, SearchStats};

pub mod prelude {
    pub use super::{plan_route, RoutePlan, RouteStop};
    pub use super::{LocationResolver, SmartCartConfig, SmartCartError, StoreLayout};
}
