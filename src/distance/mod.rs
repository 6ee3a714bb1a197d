//! Distance and travel time matrices.
//!
//! Provides a dense matrix and the paired duration/distance model that every
//! routing and costing operation reads from.

mod matrix;
mod model;

pub use matrix::DenseMatrix;
pub use model::MatrixModel;
