//! Trip plan facade.

use serde::Serialize;
use tracing::debug;

use crate::constructive::optimize;
use crate::distance::MatrixModel;
use crate::error::RoutingError;
use crate::evaluation::{trip_totals, TripAggregator};
use crate::models::{CostConfig, RouteLeg, RouteOrder, Strategy, TripSummary, TripTotals};

/// Everything the presentation layer renders for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// Strategy that produced `order`.
    pub strategy: Strategy,
    /// Visiting order.
    pub order: RouteOrder,
    /// Costed legs in visiting order.
    pub legs: Vec<RouteLeg>,
    /// Totals of `legs`.
    pub summary: TripSummary,
    /// Duration and distance in the supplied waypoint order.
    pub as_given: TripTotals,
}

/// Optimizes, aggregates and totals a trip in one call.
///
/// Returns `Ok(None)` while no matrix is available yet. A matrix with fewer
/// than two waypoints yields a plan with no legs.
///
/// # Examples
///
/// ```
/// use routegen_core::distance::MatrixModel;
/// use routegen_core::models::{CostConfig, Strategy};
/// use routegen_core::planning::plan_trip;
///
/// let config = CostConfig::default();
/// assert!(plan_trip(None, Strategy::NearestNeighbor, &config).unwrap().is_none());
///
/// let model = MatrixModel::from_rows(
///     &[vec![0.0, 60.0], vec![60.0, 0.0]],
///     &[vec![0.0, 1000.0], vec![1000.0, 0.0]],
/// )
/// .unwrap();
/// let plan = plan_trip(Some(&model), Strategy::NearestNeighbor, &config)
///     .unwrap()
///     .unwrap();
/// assert_eq!(plan.order.as_slice(), &[0, 1]);
/// assert_eq!(plan.summary.cost, 0.51);
/// ```
pub fn plan_trip(
    model: Option<&MatrixModel>,
    strategy: Strategy,
    config: &CostConfig,
) -> Result<Option<TripPlan>, RoutingError> {
    let Some(model) = model else {
        debug!(%strategy, "matrix not ready, skipping trip plan");
        return Ok(None);
    };

    let order = optimize(model, strategy)?;
    let legs = TripAggregator::new(model, config).aggregate(&order)?;
    let summary = TripSummary::from_legs(&legs);
    let as_given = trip_totals(model, model.size());

    Ok(Some(TripPlan {
        strategy,
        order,
        legs,
        summary,
        as_given,
    }))
}
