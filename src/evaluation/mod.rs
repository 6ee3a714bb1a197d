//! Trip costing and aggregation.
//!
//! - [`cost_of`] — Monetary cost of a single leg
//! - [`price_matrix`] — Pairwise cost grid for matrix display
//! - [`TripAggregator`] / [`aggregate`] — Costed legs with running totals
//! - [`trip_totals`] — Duration and distance in the supplied order

mod aggregator;
mod cost;

pub use aggregator::{aggregate, trip_totals, TripAggregator};
pub use cost::{cost_of, edge_cost, price_matrix, round2};
