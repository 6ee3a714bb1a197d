//! One-call trip planning over the current matrix snapshot.
//!
//! The owning application keeps the latest [`MatrixModel`](crate::distance::MatrixModel)
//! and [`CostConfig`](crate::models::CostConfig) and calls [`plan_trip`] again whenever
//! either changes. Nothing is cached between calls.

mod trip_plan;

pub use trip_plan::{plan_trip, TripPlan};
