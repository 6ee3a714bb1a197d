//! Greedy nearest-by-metric walk.
//!
//! Starting at waypoint 0, repeatedly append the unvisited waypoint with the
//! strictly smallest metric from the last visited one. Ties keep the lowest
//! index, since an equal value never replaces the incumbent during the
//! left-to-right scan.
//!
//! # Complexity
//!
//! O(n²) time, O(n) auxiliary space.
//!
//! # Reference
//!
//! The nearest-neighbor tour is the simplest TSP construction heuristic.
//! It gives no optimality guarantee but is fast and fully reproducible.

use tracing::trace;

use crate::error::RoutingError;
use crate::models::RouteOrder;

/// Builds a visiting order over `n` waypoints by greedy walk on `metric`.
///
/// `metric(from, to)` is the cost of the directed edge `from → to`. Only
/// finite values can be selected; if every remaining candidate is
/// unreachable the walk fails with [`RoutingError::Unreachable`] instead of
/// returning a short route.
///
/// # Examples
///
/// ```
/// use routegen_core::constructive::nearest_neighbor;
///
/// let d = [[0.0, 1000.0, 3000.0], [1000.0, 0.0, 2000.0], [3000.0, 2000.0, 0.0]];
/// let order = nearest_neighbor(3, |i, j| d[i][j]).unwrap();
/// assert_eq!(order.as_slice(), &[0, 1, 2]);
/// ```
pub fn nearest_neighbor<F>(n: usize, metric: F) -> Result<RouteOrder, RoutingError>
where
    F: Fn(usize, usize) -> f64,
{
    if n == 0 {
        return Ok(RouteOrder::default());
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let mut best: Option<usize> = None;
        let mut best_value = f64::INFINITY;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let value = metric(current, candidate);
            if value < best_value {
                best_value = value;
                best = Some(candidate);
            }
        }

        let Some(next) = best else {
            return Err(RoutingError::Unreachable {
                from: current,
                visited: order.len(),
                total: n,
            });
        };
        trace!(from = current, to = next, value = best_value, "greedy step");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Ok(RouteOrder::new(order))
}
