//! Route ordering heuristics.
//!
//! - [`nearest_neighbor`] — Greedy nearest-by-metric walk from waypoint 0, O(n²)
//! - [`optimize`] — Dispatches a [`Strategy`](crate::models::Strategy) to the
//!   identity order or to the greedy walk on distance or duration

mod nearest_neighbor;
mod optimizer;

pub use nearest_neighbor::nearest_neighbor;
pub use optimizer::optimize;
