//! HTTP API for the SmartCart route optimizer.
//!
//! Endpoints:
//! - `GET /api/health`
//! - `GET /api/sections`
//! - `POST /api/optimize`

pub mod api;
pub mod console;

pub use api::{router, AppState};
