//! Domain model types for route ordering and trip costing.
//!
//! Provides the strategy selector, the cost configuration, route orders
//! as permutations of waypoint indices, and the per-leg and whole-trip
//! outputs handed to the presentation layer.

mod cost_config;
mod route;
mod strategy;
mod trip;

pub use cost_config::CostConfig;
pub use route::{RouteLeg, RouteOrder};
pub use strategy::{Metric, Strategy};
pub use trip::{TripSummary, TripTotals};
