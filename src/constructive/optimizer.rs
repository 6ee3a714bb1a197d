//! Strategy dispatch over a [`MatrixModel`].

use tracing::debug;

use crate::distance::MatrixModel;
use crate::error::RoutingError;
use crate::models::{RouteOrder, Strategy};

use super::nearest_neighbor;

/// Computes a visiting order for every waypoint in `model`.
///
/// [`Strategy::Original`] returns the identity order without reading the
/// matrices. The greedy strategies start at waypoint 0 and walk by distance
/// (`nearest`, `shortest`) or by duration (`fastest`). Fewer than two
/// waypoints yield `[]` or `[0]`.
///
/// # Examples
///
/// ```
/// use routegen_core::distance::MatrixModel;
/// use routegen_core::constructive::optimize;
/// use routegen_core::models::Strategy;
///
/// let model = MatrixModel::from_rows(
///     &[vec![0.0, 60.0, 180.0], vec![60.0, 0.0, 120.0], vec![180.0, 120.0, 0.0]],
///     &[vec![0.0, 1000.0, 3000.0], vec![1000.0, 0.0, 2000.0], vec![3000.0, 2000.0, 0.0]],
/// )
/// .unwrap();
/// let order = optimize(&model, Strategy::NearestNeighbor).unwrap();
/// assert_eq!(order.as_slice(), &[0, 1, 2]);
/// ```
pub fn optimize(model: &MatrixModel, strategy: Strategy) -> Result<RouteOrder, RoutingError> {
    let n = model.size();
    let order = match strategy.metric() {
        Some(metric) if n >= 2 => {
            nearest_neighbor(n, |from, to| metric.between(model, from, to))?
        }
        _ => RouteOrder::identity(n),
    };
    debug!(%strategy, waypoints = n, order = ?order.as_slice(), "route optimized");
    Ok(order)
}
