//! SmartCart Core - store reference data and route distance
//!
//! This crate provides the leaf components of the route optimizer:
//! - The built-in store layout (sections, walls, entrance, exit)
//! - Item-to-section resolution through [`LocationResolver`]
//! - Straight-line route distance evaluation
//! - The error type surfaced to callers

pub mod distance;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod location;


pub use distance::{evaluate_route, path_length, RouteDistance};
pub use error::{Result, SmartCartError};
pub use geometry::Coordinate;
pub use layout::{Section, Shelf, StoreLayout, DEFAULT_LAYOUT_NAME, GRID_SIZE};
pub use location::{Location, LocationResolver};
