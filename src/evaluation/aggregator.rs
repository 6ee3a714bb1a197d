//! Trip aggregator that turns a route order into costed legs.

use tracing::debug;

use crate::distance::MatrixModel;
use crate::error::RoutingError;
use crate::models::{CostConfig, RouteLeg, RouteOrder, TripTotals};

use super::cost::{edge_cost, round2, METERS_PER_KM, SECONDS_PER_MINUTE};

/// Computes per-leg and running distance, duration and cost for route orders
/// over one matrix snapshot.
///
/// # Examples
///
/// ```
/// use routegen_core::distance::MatrixModel;
/// use routegen_core::evaluation::TripAggregator;
/// use routegen_core::models::{CostConfig, RouteOrder};
///
/// let model = MatrixModel::from_rows(
///     &[vec![0.0, 60.0], vec![60.0, 0.0]],
///     &[vec![0.0, 1000.0], vec![1000.0, 0.0]],
/// )
/// .unwrap();
/// let config = CostConfig::default();
///
/// let aggregator = TripAggregator::new(&model, &config);
/// let legs = aggregator.aggregate(&RouteOrder::new(vec![1, 0])).unwrap();
/// assert_eq!(legs.len(), 1);
/// assert_eq!(legs[0].from_index, 1);
/// assert_eq!(legs[0].cost, 0.51);
/// ```
pub struct TripAggregator<'a> {
    model: &'a MatrixModel,
    config: &'a CostConfig,
}

impl<'a> TripAggregator<'a> {
    /// Creates an aggregator over the given snapshot.
    pub fn new(model: &'a MatrixModel, config: &'a CostConfig) -> Self {
        Self { model, config }
    }

    /// Builds the leg sequence for `order`.
    ///
    /// Indices must be in range and unique. An order with fewer than two
    /// waypoints has no legs; any longer order must visit every waypoint
    /// and only cross edges with finite distance and duration.
    pub fn aggregate(&self, order: &RouteOrder) -> Result<Vec<RouteLeg>, RoutingError> {
        let n = self.model.size();
        order.check_indices(n)?;
        if order.len() < 2 {
            return Ok(Vec::new());
        }
        order.validate_for(n)?;
        self.config.validate()?;

        let mut legs = Vec::with_capacity(order.len() - 1);
        let mut cumulative_distance = 0.0;
        let mut cumulative_duration = 0.0;
        let mut cumulative_cost = 0.0;

        for (k, (from, to)) in order.pairs().enumerate() {
            // Edges are looked up by waypoint index, never by step position.
            let meters = self.model.distance(from, to);
            let seconds = self.model.duration(from, to);
            if !meters.is_finite() || !seconds.is_finite() {
                return Err(RoutingError::UnreachableLeg { from, to });
            }
            let distance_km = meters / METERS_PER_KM;
            let duration_min = seconds / SECONDS_PER_MINUTE;
            let cost = edge_cost(self.model, from, to, self.config);

            cumulative_distance += distance_km;
            cumulative_duration += duration_min;
            cumulative_cost += cost;

            legs.push(RouteLeg {
                step: k + 1,
                from_index: from,
                to_index: to,
                distance_km,
                duration_min,
                cost,
                cumulative_distance_km: cumulative_distance,
                cumulative_duration_min: cumulative_duration,
                cumulative_cost,
            });
        }

        debug!(
            legs = legs.len(),
            distance_km = cumulative_distance,
            duration_min = cumulative_duration,
            total_cost = cumulative_cost,
            "trip aggregated"
        );
        Ok(legs)
    }
}

/// Builds the leg sequence for `order` over `model`, costed with `config`.
///
/// Shorthand for [`TripAggregator::aggregate`].
pub fn aggregate(
    model: &MatrixModel,
    order: &RouteOrder,
    config: &CostConfig,
) -> Result<Vec<RouteLeg>, RoutingError> {
    TripAggregator::new(model, config).aggregate(order)
}

/// Totals for the first `count` waypoints in their supplied order.
///
/// Sums `matrix[k][k + 1]` for `k` in `0..count - 1`, ignoring any
/// optimized order. `count` is clamped to the matrix size.
pub fn trip_totals(model: &MatrixModel, count: usize) -> TripTotals {
    let count = count.min(model.size());
    let mut seconds = 0.0;
    let mut meters = 0.0;
    for k in 1..count {
        seconds += model.duration(k - 1, k);
        meters += model.distance(k - 1, k);
    }
    TripTotals {
        duration_minutes: round2(seconds / SECONDS_PER_MINUTE),
        distance_km: round2(meters / METERS_PER_KM),
    }
}
