//! # routegen-core
//!
//! Route ordering and trip costing over precomputed duration/distance
//! matrices. Geocoding, matrix retrieval and rendering live outside this
//! crate; it only consumes a resolved [`distance::MatrixModel`].
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Strategy, CostConfig, RouteOrder, RouteLeg, totals)
//! - [`distance`] — Dense matrix and the paired duration/distance model
//! - [`constructive`] — Route ordering (identity, greedy nearest-by-metric walk)
//! - [`evaluation`] — Leg cost formula, price matrix, trip aggregation
//! - [`planning`] — One-call optimize + aggregate facade
//! - [`error`] — Error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planning;

pub use error::RoutingError;
